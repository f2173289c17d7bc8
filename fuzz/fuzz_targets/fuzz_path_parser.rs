#![no_main]

use cv_string_reparam::{read_path, reparametrize, ReparamOptions};
use libfuzzer_sys::fuzz_target;

// Beliebige Eingaben dürfen nur Fehler liefern, niemals paniken.
fuzz_target!(|data: &[u8]| {
    let Ok(path) = read_path(data) else {
        return;
    };
    if let Ok(result) = reparametrize(&path, &ReparamOptions::default()) {
        assert_eq!(result.path.len(), path.len());
        assert_eq!(result.path.first(), path.first());
        assert_eq!(result.path.last(), path.last());
    }
});
