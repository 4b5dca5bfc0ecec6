/// Built-in magic-byte table.
///
/// Sources:
/// <https://en.wikipedia.org/wiki/List_of_file_signatures>,
/// <https://www.garykessler.net/library/file_sigs.html>
///
/// Order matters: classification is first-match-wins, so an entry shadowed
/// by an earlier identical (or shorter) prefix never wins. Several labels are
/// shadowed this way (MS Excel, MS Powerpoint, AVI, WEBM, JPG, RIFF, MSI, RB,
/// EPUB). That looks accidental rather than a deliberate priority, but the
/// order is kept as-is so results stay comparable across versions.
pub(crate) const BUILTIN_SIGNATURES: &[(&str, &[u8])] = &[
    // Office
    ("MS Word", &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
    ("MS Word (2007+)", &[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x06, 0x00]),
    ("MS Excel", &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
    ("MS Excel (2007+)", &[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x06, 0x00]),
    ("MS Powerpoint", &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
    ("MS Powerpoint (2007+)", &[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x06, 0x00]),
    // Audio
    ("AAC", &[0xFF, 0xF1]),
    ("FLAC", &[0x66, 0x4C, 0x61, 0x43]),
    ("MP3", &[0x49, 0x44, 0x33]),
    ("WAV", &[0x52, 0x49, 0x46, 0x46]),
    // Video
    ("AVI", &[0x52, 0x49, 0x46, 0x46]),
    ("FLV", &[0x46, 0x4C, 0x56, 0x01]),
    ("MKV", &[0x1A, 0x45, 0xDF, 0xA3]),
    ("MOV", &[0x6D, 0x6F, 0x6F, 0x76]),
    ("MP4", &[0x00, 0x00, 0x00, 0x20, 0x66, 0x74, 0x79, 0x70]),
    ("MPG", &[0x00, 0x00, 0x01, 0xBA]),
    ("WEBM", &[0x1A, 0x45, 0xDF, 0xA3]),
    // Images
    ("BMP", &[0x42, 0x4D]),
    ("GIF", &[0x47, 0x49, 0x46, 0x38]),
    ("IMG", &[0x53, 0x43, 0x4D, 0x49]),
    ("JPEG", &[0xFF, 0xD8, 0xFF]),
    ("JPG", &[0xFF, 0xD8, 0xFF]),
    ("PNG", &[0x89, 0x50, 0x4E, 0x47]),
    ("RIFF", &[0x52, 0x49, 0x46, 0x46]),
    ("WEBP", &[0x57, 0x45, 0x42, 0x50]),
    // Text
    ("RTF", &[0x7B, 0x5C, 0x72, 0x74, 0x66, 0x31]),
    // Compressed
    ("7Z", &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C]),
    ("GZ", &[0x1F, 0x8B, 0x08]),
    ("RAR", &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00]),
    ("TAR", &[0x75, 0x73, 0x74, 0x61, 0x72, 0x00, 0x30, 0x30]),
    ("ZIP", &[0x50, 0x4B, 0x03, 0x04]),
    // Databases
    ("MDB", b"Standard Jet DB"),
    ("ACCDB", b"\x00\x01\x00Standard ACE DB"),
    ("SQLite", b"SQLite format 3\x00"),
    // Executables
    ("EXE", &[0x4D, 0x5A]),
    ("MSI", &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
    ("DMG", &[0x78, 0x01, 0x73, 0x0D, 0x62, 0x62, 0x60]),
    // Scripts
    ("PY", b"#!/usr/b"),
    ("JS", b"/*\n     "),
    ("PHP", b"<?php"),
    ("RB", b"#!/usr/b"),
    // CAD
    ("DWG", b"AC10"),
    ("DXF", b"SION DEVEL Version"),
    // Documents
    ("EPUB", &[0x50, 0x4B, 0x03, 0x04, 0x0A, 0x00, 0x02, 0x00]),
    ("PDF", b"%PDF"),
];
