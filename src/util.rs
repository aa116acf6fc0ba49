//! Small utility helpers used across modules.

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
/// The cut backs off to a char boundary so multibyte input never panics.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) {
    cut -= 1;
  }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncation_respects_char_boundaries() {
    let s = "héllo wörld, this is a long payload";
    let t = trunc_for_log(s, 2);
    assert!(t.starts_with('h'));
    assert!(t.contains("bytes total"));
    assert_eq!(trunc_for_log("short", 64), "short");
  }
}
