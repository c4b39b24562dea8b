#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sufx::utils::naive;

#[derive(Arbitrary, Debug)]
struct SearchInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: SearchInput| {
    let sa = sufx::build_suffix_array(&input.text);
    let expected = naive::contains(&input.text, &input.pattern);
    assert_eq!(sa.contains(&input.pattern), expected);
    assert_eq!(sa.suffix_tree().contains(&input.pattern), expected);
    assert_eq!(
        sa.count(&input.pattern),
        naive::count_occurrences(&input.text, &input.pattern)
    );
});
