// Vector space model: TF-IDF weighting and similarity over sparse term vectors.

pub mod similarity;
pub mod tfidf;
pub mod tokenize;
pub mod traits;
