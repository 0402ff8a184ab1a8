use lazy_static::lazy_static;

lazy_static! {
    /// The built-in word bank: 40 entries in four difficulty tiers of 10
    /// (simple words, medium words, complex words, phrases), in tier order.
    pub static ref WORD_BANK: Vec<&'static str> = {
        let mut v = Vec::new();
        let words_raw = include_str!("data/words.txt");
        for line in words_raw.lines().filter(|l| !l.is_empty()) {
            v.push(line);
        }
        v
    };
}
