#![no_main]

use libfuzzer_sys::fuzz_target;
use tarzan::SuffixTree;

fuzz_target!(|data: &[u8]| {
    // Map bytes onto a small alphabet so substrings repeat
    let text: String = data.iter().take(256).map(|b| (b'a' + b % 4) as char).collect();
    let symbols: Vec<char> = text.chars().collect();
    let tree = SuffixTree::new(&text);

    for start in 0..symbols.len() {
        for end in start + 1..=symbols.len().min(start + 8) {
            let pattern = &symbols[start..end];
            let expected = symbols.windows(pattern.len()).filter(|w| *w == pattern).count();
            let pattern: String = pattern.iter().collect();

            assert!(tree.has_substring(&pattern));
            assert_eq!(tree.occurrence_count(&pattern), Some(expected));
        }
    }
});
