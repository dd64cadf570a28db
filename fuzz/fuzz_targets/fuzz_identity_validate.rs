#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let result = sporokul_core::identity::validate(s);
        assert_eq!(result.is_valid(), result.error().is_none());
        let _ = sporokul_core::identity::format(s);
        let _ = sporokul_core::identity::mask(s);
    }
});
