//! Prompt construction for MASH category generation.
//!
//! The backend is a free-text generator with no output-schema enforcement,
//! so the prompt is the only lever for shaping structure: the exact counts
//! are restated, forbidden behaviors are enumerated, and the format examples
//! are fixed constants so they never bias generation toward the request theme.

/// Format-only example categories shown to the model. Generic on purpose —
/// not derived from the request theme.
const FORMAT_EXAMPLES: &str = r#"[
  {
    "title": "Vacation Destination",
    "options": [
      { "title": "Paris", "state": "waiting" },
      { "title": "Tokyo", "state": "waiting" },
      { "title": "Sydney", "state": "waiting" },
      { "title": "Cairo", "state": "waiting" }
    ]
  },
  {
    "title": "Superpower",
    "options": [
      { "title": "Invisibility", "state": "waiting" },
      { "title": "Flight", "state": "waiting" },
      { "title": "Telepathy", "state": "waiting" },
      { "title": "Time Travel", "state": "waiting" }
    ]
  }
]"#;

/// Build the generation prompt for a theme and the requested counts.
/// Pure function of its inputs.
pub fn build_category_prompt(theme: &str, num_categories: u32, num_options: u32) -> String {
    format!(
        "MASH is a game where players create fun, imaginative categories and fill each \
         with possible options. \
         Generate exactly {num_categories} unique MASH game categories for the theme: {theme}. \
         Each category must have exactly {num_options} unique options. Do not generate more or fewer. \
         If you cannot think of enough options, repeat previous ones to reach the required count. \
         Do not repeat the same category title more than once. \
         Do not use the example categories or options in your response. Create new, unique \
         categories and options for the given theme. \
         Format your response as a JSON array of category objects only. Each category must have:\n\
         - 'title': a string name for the category\n\
         - 'options': an array of objects, each with 'title' (string) and 'state' \
         (one of: 'waiting', 'chosen', 'discarded')\n\n\
         Here are examples of the format I want (do not include this text or these examples \
         in your response):\n{FORMAT_EXAMPLES}\n\n\
         DO NOT include any markdown formatting, explanations, or additional text. \
         Do not include any comments. Only output valid JSON."
    )
}
