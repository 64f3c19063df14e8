/// Glyphs that stream down the columns in the matrix rain.
pub(crate) const MATRIX_GLYPHS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Glyphs cycled through while a cell is being decrypted.
pub(crate) const CIPHER_GLYPHS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', '@', '#', '$', '%', '&', '*'];

/// Pick the matrix glyph for a non negative seed.
pub(crate) fn matrix_glyph(seed: i32) -> char {
    MATRIX_GLYPHS[seed.rem_euclid(MATRIX_GLYPHS.len() as i32) as usize]
}

/// Pick a cipher glyph using `rng`.
pub(crate) fn cipher_glyph(rng: &mut fastrand::Rng) -> char {
    CIPHER_GLYPHS[rng.usize(..CIPHER_GLYPHS.len())]
}
