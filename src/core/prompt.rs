use crate::models::{PriceRange, SearchCriteria};

/// Bounds on how many recommendations the model is asked for
pub const MIN_RESULTS: usize = 5;
pub const MAX_RESULTS: usize = 8;

const ANY: &str = "Any";
const NONE: &str = "None";

/// Render validated criteria into the instruction sent to the model
///
/// The output is a pure function of `criteria`. Absent fields are written as
/// explicit placeholders so the model never sees an empty value.
pub fn build_prompt(criteria: &SearchCriteria) -> String {
    let cuisine = criteria.cuisine.as_deref().unwrap_or(ANY);
    let price_range = criteria.price_range.map(|p| p.as_str()).unwrap_or(ANY);
    let dietary = criteria.dietary_restrictions.as_deref().unwrap_or(NONE);
    let tiers = PriceRange::ALL
        .iter()
        .map(PriceRange::as_str)
        .collect::<Vec<_>>()
        .join("/");

    format!(
        "You are a food recommendation assistant. Suggest realistic places to eat \
         in the requested area.\n\
         \n\
         Search criteria:\n\
         - Location: {location}\n\
         - Cuisine: {cuisine}\n\
         - Price Range: {price_range}\n\
         - Dietary Restrictions: {dietary}\n\
         \n\
         Recommend between {min} and {max} establishments that plausibly exist in this area. \
         Every recommendation must include:\n\
         1. name: the establishment name\n\
         2. cuisine: the cuisine type\n\
         3. priceRange: exactly one of {tiers}\n\
         4. description: a short description of what they serve\n\
         5. address: a realistic street address in {location}\n\
         6. rating: a number from 1 to 5\n\
         7. dietaryOptions: an array of dietary tags, if any apply\n\
         \n\
         Mix local favourites with well-known spots and vary the cuisines unless one was requested.\n\
         \n\
         Respond with a single JSON object with exactly these top-level fields:\n\
         - location: the search location\n\
         - searchResults: an array of recommendations\n\
         - searchSummary: a one or two sentence summary of the recommendations\n\
         \n\
         Each element of searchResults has the fields: name, cuisine, priceRange, \
         description, address, rating, dietaryOptions (array of strings).\n",
        location = criteria.location,
        min = MIN_RESULTS,
        max = MAX_RESULTS,
    )
}
