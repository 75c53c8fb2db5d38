/// Canonicalize a comma-separated tag string: each tag trimmed, rejoined
/// with `", "`. This is the wire representation the backend stores.
pub fn normalize(input: &str) -> String {
    input
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(", ")
}
