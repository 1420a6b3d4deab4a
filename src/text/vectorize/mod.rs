
use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::text::stopwords::StopWords;
use crate::{RecError, Result};

/// Split text into lowercase alphanumeric terms.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Sparse, L2-normalized term-weight vector for a single document.
///
/// Weights are stored as `(term_index, weight)` pairs sorted by term index,
/// so the dot product of two vectors is a linear merge. Because every vector
/// is unit length, that dot product *is* the cosine similarity.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentVector {
    weights: Vec<(usize, f64)>,
}

impl DocumentVector {
    /// Build from raw weights, scaling to unit length. A document with no
    /// in-vocabulary terms becomes the zero vector.
    fn from_weights(mut weights: Vec<(usize, f64)>) -> Self {
        let norm = weights
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for entry in &mut weights {
                entry.1 /= norm;
            }
        }
        Self { weights }
    }

    /// Dot product by merging the two sorted index lists.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        let mut i = 0;
        let mut j = 0;
        while i < self.weights.len() && j < other.weights.len() {
            match self.weights[i].0.cmp(&other.weights[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.weights[i].1 * other.weights[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Number of non-zero terms.
    #[inline]
    pub fn term_count(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Converts documents into TF-IDF vectors over a fitted vocabulary.
///
/// `fit` must run exactly once, over the *union* of every document that will
/// later be compared: query-side and candidate-side documents transformed
/// through the same fit share one vector space. Fitting each side separately
/// yields spaces of different dimensionality whose cosine is meaningless.
///
/// Term weight = raw term frequency × smoothed inverse document frequency
/// `ln((1 + n) / (1 + df)) + 1`, then the vector is scaled to unit length.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_words: StopWords,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Vectorizer with the default English stop-word list.
    #[inline]
    pub fn new() -> Self {
        Self::with_stop_words(StopWords::english())
    }

    /// Vectorizer with a caller-provided stop-word filter.
    #[inline]
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    /// Learn the vocabulary and document frequencies from a corpus.
    ///
    /// Fails with [`RecError::DegenerateCorpus`] when the corpus is empty or
    /// every token was filtered as a stop word; a silent empty vocabulary
    /// would make every later similarity a meaningless zero.
    #[inline]
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<()> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for document in corpus {
            let unique_terms: BTreeSet<String> =
                self.terms_of(document.as_ref()).into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(RecError::DegenerateCorpus);
        }

        let n_docs = corpus.len() as f64;
        self.vocabulary = HashMap::with_capacity(document_frequency.len());
        self.idf = Vec::with_capacity(document_frequency.len());

        // BTreeMap iteration gives a deterministic term order, so index
        // assignment is reproducible across runs.
        for (idx, (term, df)) in document_frequency.into_iter().enumerate() {
            self.vocabulary.insert(term, idx);
            self.idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
        }

        debug!(
            "Fitted vocabulary: {} terms over {} documents",
            self.vocabulary.len(),
            corpus.len()
        );

        Ok(())
    }

    /// Transform one document into the fitted vector space.
    ///
    /// Terms outside the vocabulary are ignored; a document made entirely of
    /// unseen terms transforms to the zero vector, which is similar to
    /// nothing. Fails with [`RecError::DegenerateCorpus`] when no usable
    /// vocabulary exists (never fitted, or fitted degenerate).
    #[inline]
    pub fn transform<S: AsRef<str>>(&self, document: S) -> Result<DocumentVector> {
        if !self.is_fitted() {
            return Err(RecError::DegenerateCorpus);
        }

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.terms_of(document.as_ref()) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let weights = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        Ok(DocumentVector::from_weights(weights))
    }

    /// Transform a batch of documents, preserving order.
    #[inline]
    pub fn transform_batch<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<DocumentVector>> {
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    /// Tokenize and drop stop words.
    fn terms_of(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }
}

impl Default for TfidfVectorizer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
