// Recommendation strategies
// Lexical: rank courses against a profile in a shared TF-IDF space.
// Collaborative: propagate courses from Jaccard-nearest students.

pub mod collaborative;
pub mod lexical;

pub use collaborative::{CollaborativeRecommender, jaccard_index};
pub use lexical::LexicalRecommender;
