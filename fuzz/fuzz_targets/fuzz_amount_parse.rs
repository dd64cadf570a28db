#![no_main]

use libfuzzer_sys::fuzz_target;
use sporokul_core::vat::{self, VatRate};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let rate = s.parse::<VatRate>().unwrap_or(VatRate::MAX);
        // Anything the boundary accepts must go through the engine without panicking.
        if let Ok(amount) = vat::parse_amount(s) {
            let r = vat::reverse_vat(amount, rate);
            let _ = vat::vat_breakdown(r.amount_excluding_vat, rate);
            let _ = vat::amount_including_vat(amount, VatRate::MAX);
        }
    }
});
