#![no_main]

use libfuzzer_sys::fuzz_target;
use ziputil_rs::{join_archive_path, normalize_archive_path};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Normalized names are relative, slash-separated and idempotent
    if let Ok(name) = normalize_archive_path(input) {
        assert!(!name.is_empty());
        assert!(!name.starts_with('/'));
        assert!(!name.contains('\\'));
        assert!(name.split('/').all(|s| !s.is_empty() && s != "." && s != ".."));
        assert_eq!(normalize_archive_path(&name).unwrap(), name);
    }

    // Joining should never panic, whatever the base
    let _ = join_archive_path("base", input);
    let _ = join_archive_path(input, "name.txt");
});
