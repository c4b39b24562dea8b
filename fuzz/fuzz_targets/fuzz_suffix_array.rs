#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::utils::naive;

fuzz_target!(|data: &[u8]| {
    // Every array and the tree must agree with the reference implementations
    let sa = sufx::build_suffix_array(data);
    if let Err(mismatch) = naive::verify(&sa, 512) {
        panic!("{mismatch}");
    }
});
