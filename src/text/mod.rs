// Text similarity engine
// One vocabulary is fitted over the combined corpus; both query and
// candidate documents are transformed through it and compared by cosine.

pub mod similarity;
pub mod stopwords;
pub mod vectorize;

pub use similarity::{cosine_similarity, rank_candidates, similarity_matrix};
pub use stopwords::{ENGLISH_STOP_WORDS, StopWords};
pub use vectorize::{DocumentVector, TfidfVectorizer, tokenize};
