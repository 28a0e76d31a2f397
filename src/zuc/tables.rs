//! Fixed constant tables for the ZUC LFSR and nonlinear function, GB/T
//! 33133.1-2016 (3GPP TS 35.221 Document 2).

/// The 16 padding constants folded into the LFSR cells during key loading,
/// one per cell, each a 15-bit value.
#[rustfmt::skip]
pub const D: [u16; 16] = [
    0x44D7, 0x26BC, 0x626B, 0x135E,
    0x5789, 0x35E2, 0x7135, 0x09AF,
    0x4D78, 0x2F13, 0x6BC4, 0x1AF1,
    0x5E26, 0x3C4D, 0x789A, 0x47AC,
];

/// S-box S0, used on bytes 0 and 2 of the nonlinear function's 32-bit
/// substitution input.
#[rustfmt::skip]
pub const S0: [u8; 256] = [
    0x3e, 0x72, 0x5b, 0x47, 0xca, 0xe0, 0x00, 0x33, 0x04, 0xd1, 0x54, 0x98, 0x09, 0xb9, 0x6d, 0xcb,
    0x7e, 0x58, 0xfc, 0xc0, 0x9d, 0x1b, 0x65, 0xad, 0xb4, 0x8f, 0xba, 0x2e, 0x25, 0x49, 0x06, 0x6e,
    0x1c, 0x35, 0x0a, 0x74, 0x34, 0x8b, 0xd5, 0xab, 0x42, 0x93, 0x6f, 0x8d, 0xc2, 0xe6, 0xdb, 0x17,
    0xa8, 0x7c, 0xf8, 0x87, 0x66, 0xe9, 0xd0, 0x13, 0x21, 0x2d, 0x96, 0x67, 0x03, 0x36, 0x29, 0x0b,
    0xac, 0x5f, 0x4a, 0x1e, 0x32, 0x68, 0x0f, 0xf7, 0x9c, 0x40, 0xa1, 0x27, 0x53, 0xf2, 0x6a, 0x8e,
    0x3a, 0xb5, 0x56, 0xc7, 0xb3, 0x2b, 0xda, 0x6c, 0xf1, 0x4d, 0x48, 0x60, 0xf0, 0xe4, 0xc9, 0x44,
    0x46, 0x3b, 0x71, 0xbf, 0x9e, 0xd4, 0x78, 0x88, 0x14, 0x23, 0xbd, 0xe2, 0x1f, 0x95, 0x62, 0xa9,
    0x9f, 0xc8, 0x7a, 0x91, 0xb6, 0x30, 0xcf, 0xd8, 0x01, 0x2c, 0x5d, 0xdc, 0x57, 0x43, 0x05, 0xb0,
    0xf9, 0xa5, 0x08, 0xc4, 0x07, 0xe3, 0x5c, 0x4b, 0x80, 0x3f, 0xd9, 0xea, 0x64, 0x76, 0xef, 0x8a,
    0x7f, 0xa0, 0xd6, 0x1d, 0x28, 0x75, 0x82, 0xc1, 0x41, 0x31, 0xf4, 0xb1, 0x85, 0xa6, 0x89, 0x5e,
    0x26, 0xcc, 0x15, 0x92, 0x1a, 0x38, 0x9b, 0x50, 0x52, 0xe7, 0xf5, 0xa2, 0xa3, 0x97, 0x84, 0x70,
    0x5a, 0x0c, 0x11, 0x69, 0x39, 0x59, 0x3c, 0x77, 0x4e, 0x81, 0xdf, 0x02, 0xc3, 0x7b, 0x90, 0x37,
    0xbe, 0x24, 0x3d, 0x99, 0x7d, 0x10, 0xee, 0xd3, 0x55, 0xd2, 0xe1, 0x4c, 0xc6, 0xe5, 0x2a, 0xaa,
    0x19, 0x79, 0x22, 0x0d, 0xae, 0xaf, 0x16, 0x0e, 0xde, 0xbc, 0x20, 0xd7, 0xa7, 0xa4, 0xcd, 0x8c,
    0x86, 0xfa, 0xb7, 0xeb, 0xc5, 0x6b, 0xe8, 0xf3, 0xb2, 0x4f, 0xfb, 0xb8, 0xfd, 0x45, 0xbb, 0x83,
    0x18, 0x73, 0xce, 0xec, 0x9a, 0x63, 0xf6, 0xed, 0x94, 0x51, 0xdd, 0x2f, 0xfe, 0x12, 0x61, 0xff,
];

/// S-box S1, used on bytes 1 and 3 of the nonlinear function's 32-bit
/// substitution input.
#[rustfmt::skip]
pub const S1: [u8; 256] = [
    0x55, 0xc2, 0x63, 0x71, 0x3b, 0xc8, 0x47, 0x86, 0x9f, 0x3c, 0xda, 0x5b, 0x29, 0xaa, 0xfd, 0x77,
    0x8c, 0xc5, 0x94, 0x0c, 0xa6, 0x1a, 0x13, 0x00, 0xe3, 0xa8, 0x16, 0x72, 0x40, 0xf9, 0xf8, 0x42,
    0x44, 0x26, 0x68, 0x96, 0x81, 0xd9, 0x45, 0x3e, 0x10, 0x76, 0xc6, 0xa7, 0x8b, 0x39, 0x43, 0xe1,
    0x3a, 0xb5, 0x56, 0x2a, 0xc0, 0x6d, 0xb3, 0x05, 0x22, 0x66, 0xbf, 0xdc, 0x0b, 0xfa, 0x62, 0x48,
    0xdd, 0x20, 0x11, 0x06, 0x36, 0xc9, 0xc1, 0xcf, 0xf6, 0x27, 0x52, 0xbb, 0x69, 0xf5, 0xd4, 0x87,
    0x7f, 0x84, 0x4c, 0xd2, 0x9c, 0x57, 0xa4, 0xbc, 0x4f, 0x9a, 0xdf, 0xfe, 0xd6, 0x8d, 0x7a, 0xeb,
    0x2b, 0x53, 0xd8, 0x5c, 0xa1, 0x14, 0x17, 0xfb, 0x23, 0xd5, 0x7d, 0x30, 0x67, 0x73, 0x08, 0x09,
    0xee, 0xb7, 0x70, 0x3f, 0x61, 0xb2, 0x19, 0x8e, 0x4e, 0xe5, 0x4b, 0x93, 0x8f, 0x5d, 0xdb, 0xa9,
    0xad, 0xf1, 0xae, 0x2e, 0xcb, 0x0d, 0xfc, 0xf4, 0x2d, 0x46, 0x6e, 0x1d, 0x97, 0xe8, 0xd1, 0xe9,
    0x4d, 0x37, 0xa5, 0x75, 0x5e, 0x83, 0x9e, 0xab, 0x82, 0x9d, 0xb9, 0x1c, 0xe0, 0xcd, 0x49, 0x89,
    0x01, 0xb6, 0xbd, 0x58, 0x24, 0xa2, 0x5f, 0x38, 0x78, 0x99, 0x15, 0x90, 0x50, 0xb8, 0x95, 0xe4,
    0xd0, 0x91, 0xc7, 0xce, 0xed, 0x0f, 0xb4, 0x6f, 0xa0, 0xcc, 0xf0, 0x02, 0x4a, 0x79, 0xc3, 0xde,
    0xa3, 0xef, 0xea, 0x51, 0xe6, 0x6b, 0x18, 0xec, 0x1b, 0x2c, 0x80, 0xf7, 0x74, 0xe7, 0xff, 0x21,
    0x5a, 0x6a, 0x54, 0x1e, 0x41, 0x31, 0x92, 0x35, 0xc4, 0x33, 0x07, 0x0a, 0xba, 0x7e, 0x0e, 0x34,
    0x88, 0xb1, 0x98, 0x7c, 0xf3, 0x3d, 0x60, 0x6c, 0x7b, 0xca, 0xd3, 0x1f, 0x32, 0x65, 0x04, 0x28,
    0x64, 0xbe, 0x85, 0x9b, 0x2f, 0x59, 0x8a, 0xd7, 0xb0, 0x25, 0xac, 0xaf, 0x12, 0x03, 0xe2, 0xf2,
];
