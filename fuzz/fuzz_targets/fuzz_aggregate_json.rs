#![no_main]

use libfuzzer_sys::fuzz_target;
use sporokul_core::vat::{self, VatLineItem};

fuzz_target!(|data: &[u8]| {
    // Decoding enforces the amount and rate limits, so aggregation must not panic.
    if let Ok(items) = serde_json::from_slice::<Vec<VatLineItem>>(data) {
        let _ = vat::aggregate(&items);
        let _ = vat::aggregate_by_rate(&items);
    }
});
