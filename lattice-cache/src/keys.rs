//! Cache-key derivation.
//!
//! Pure functions from request inputs to stable string keys. The vector
//! signature is deliberately compact: first 3 + last 3 components plus the
//! length are enough to distinguish embeddings in practice without hashing
//! the full vector on every lookup.

/// Key for the goal-text → embedding cache: trimmed, lower-cased, prefixed.
pub fn embedding_key(text: &str) -> String {
    format!("emb:{}", text.trim().to_lowercase())
}

/// blake3 fingerprint of a set of ids, order- and duplicate-insensitive.
///
/// A user's changing learning history must invalidate cached search results,
/// so the fingerprint participates in [`search_key`].
pub fn history_fingerprint(ids: &[String]) -> String {
    let mut sorted: Vec<&str> = ids.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.dedup();
    let joined = sorted.join("\n");
    blake3::hash(joined.as_bytes()).to_hex().to_string()
}

/// Key for the search-result cache.
pub fn search_key(
    embedding: &[f32],
    threshold: f64,
    limit: usize,
    history: Option<&str>,
) -> String {
    let signature = vector_signature(embedding);
    let history = history.unwrap_or("none");
    format!("search:{signature}:t{threshold:.2}:n{limit}:h{history}")
}

/// Compact signature: first 3 + last 3 components + length.
fn vector_signature(embedding: &[f32]) -> String {
    let head: Vec<String> = embedding.iter().take(3).map(|v| format!("{v:.6}")).collect();
    let tail: Vec<String> = embedding
        .iter()
        .rev()
        .take(3)
        .rev()
        .map(|v| format!("{v:.6}"))
        .collect();
    format!("{}|{}|{}", head.join(","), tail.join(","), embedding.len())
}
