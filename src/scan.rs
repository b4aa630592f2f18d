// SPDX-License-Identifier: Apache-2.0

/// Find the offset of the first occurrence of `needle` in `haystack`.
///
/// Both slices are treated as opaque bytes: the board info partition is
/// not guaranteed to be text, so no encoding or NULL terminator is assumed.
/// A needle longer than the haystack never matches. An empty needle
/// matches at offset 0.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&i| &haystack[i..i + needle.len()] == needle)
}
