//! Transcribed Line_Break classification data, UAX #14 revision 39 default
//! assignments.
//!
//! Two tiers. `EXACT` holds code points whose class differs from the range
//! that surrounds them; it becomes a hash map at first use. `RANGES` is
//! sorted by its first field, the highest code point of the range; a lookup
//! takes the first entry whose bound is >= the query. Code points past the
//! final bound classify as AL.

use super::class::BreakClass as B;

pub(super) static EXACT: &[(u32, B)] = &[
    (0x0009, B::BA), (0x000A, B::LF), (0x000B, B::BK), (0x000C, B::BK),
    (0x000D, B::CR), (0x0020, B::SP), (0x0021, B::EX), (0x0022, B::QU),
    (0x0023, B::AL), (0x0024, B::PR), (0x0025, B::PO), (0x0026, B::AL),
    (0x0027, B::QU), (0x0028, B::OP), (0x0029, B::CP), (0x002A, B::AL),
    (0x002B, B::PR), (0x002C, B::IS), (0x002D, B::HY), (0x002E, B::IS),
    (0x002F, B::SY), (0x003A, B::IS), (0x003B, B::IS), (0x003F, B::EX),
    (0x005B, B::OP), (0x005C, B::PR), (0x005D, B::CP), (0x007B, B::OP),
    (0x007C, B::BA), (0x007D, B::CL), (0x007E, B::AL), (0x0085, B::NL),
    (0x00A0, B::GL), (0x00A1, B::OP), (0x00A2, B::PO), (0x00AB, B::QU),
    (0x00AC, B::AL), (0x00AD, B::BA), (0x00AE, B::AL), (0x00AF, B::AL),
    (0x00B0, B::PO), (0x00B1, B::PR), (0x00B2, B::AL), (0x00B3, B::AL),
    (0x00B4, B::BB), (0x00BB, B::QU), (0x00BF, B::OP), (0x02C8, B::BB),
    (0x02CC, B::BB), (0x02DF, B::BB), (0x034F, B::GL), (0x037E, B::IS),
    (0x0589, B::IS), (0x058A, B::BA), (0x058F, B::PR), (0x0590, B::AL),
    (0x05BE, B::BA), (0x05BF, B::CM), (0x05C0, B::AL), (0x05C1, B::CM),
    (0x05C2, B::CM), (0x05C3, B::AL), (0x05C4, B::CM), (0x05C5, B::CM),
    (0x05C6, B::EX), (0x05C7, B::CM), (0x060C, B::IS), (0x060D, B::IS),
    (0x060E, B::AL), (0x060F, B::AL), (0x061B, B::EX), (0x061C, B::CM),
    (0x061D, B::AL), (0x061E, B::EX), (0x061F, B::EX), (0x066A, B::PO),
    (0x066B, B::NU), (0x066C, B::NU), (0x0670, B::CM), (0x06D4, B::EX),
    (0x06D5, B::AL), (0x06DD, B::AL), (0x06DE, B::AL), (0x06E5, B::AL),
    (0x06E6, B::AL), (0x06E7, B::CM), (0x06E8, B::CM), (0x06E9, B::AL),
    (0x06EE, B::AL), (0x06EF, B::AL), (0x0711, B::CM), (0x07F8, B::IS),
    (0x07F9, B::EX), (0x081A, B::AL), (0x0824, B::AL), (0x0828, B::AL),
    (0x08E2, B::AL), (0x093D, B::AL), (0x0950, B::AL), (0x0962, B::CM),
    (0x0963, B::CM), (0x0964, B::BA), (0x0965, B::BA), (0x09BC, B::CM),
    (0x09BD, B::AL), (0x09C5, B::AL), (0x09C6, B::AL), (0x09C7, B::CM),
    (0x09C8, B::CM), (0x09C9, B::AL), (0x09CA, B::AL), (0x09D7, B::CM),
    (0x09E2, B::CM), (0x09E3, B::CM), (0x09E4, B::AL), (0x09E5, B::AL),
    (0x09F0, B::AL), (0x09F1, B::AL), (0x09F2, B::PO), (0x09F3, B::PO),
    (0x09F9, B::PO), (0x09FA, B::AL), (0x09FB, B::PR), (0x0A3C, B::CM),
    (0x0A3D, B::AL), (0x0A47, B::CM), (0x0A48, B::CM), (0x0A49, B::AL),
    (0x0A4A, B::AL), (0x0A51, B::CM), (0x0A70, B::CM), (0x0A71, B::CM),
    (0x0A75, B::CM), (0x0ABC, B::CM), (0x0ABD, B::AL), (0x0AC6, B::AL),
    (0x0ACA, B::AL), (0x0AE2, B::CM), (0x0AE3, B::CM), (0x0AE4, B::AL),
    (0x0AE5, B::AL), (0x0AF0, B::AL), (0x0AF1, B::PR), (0x0B00, B::AL),
    (0x0B3C, B::CM), (0x0B3D, B::AL), (0x0B45, B::AL), (0x0B46, B::AL),
    (0x0B47, B::CM), (0x0B48, B::CM), (0x0B49, B::AL), (0x0B4A, B::AL),
    (0x0B56, B::CM), (0x0B57, B::CM), (0x0B62, B::CM), (0x0B63, B::CM),
    (0x0B64, B::AL), (0x0B65, B::AL), (0x0B82, B::CM), (0x0BC9, B::AL),
    (0x0BD7, B::CM), (0x0BF9, B::PR), (0x0C45, B::AL), (0x0C49, B::AL),
    (0x0C55, B::CM), (0x0C56, B::CM), (0x0C62, B::CM), (0x0C63, B::CM),
    (0x0C64, B::AL), (0x0C65, B::AL), (0x0CBC, B::CM), (0x0CBD, B::AL),
    (0x0CC5, B::AL), (0x0CC9, B::AL), (0x0CD5, B::CM), (0x0CD6, B::CM),
    (0x0CE2, B::CM), (0x0CE3, B::CM), (0x0CE4, B::AL), (0x0CE5, B::AL),
    (0x0D3B, B::CM), (0x0D3C, B::CM), (0x0D3D, B::AL), (0x0D45, B::AL),
    (0x0D49, B::AL), (0x0D57, B::CM), (0x0D62, B::CM), (0x0D63, B::CM),
    (0x0D64, B::AL), (0x0D65, B::AL), (0x0D79, B::PO), (0x0D82, B::CM),
    (0x0D83, B::CM), (0x0DCA, B::CM), (0x0DD5, B::AL), (0x0DD6, B::CM),
    (0x0DD7, B::AL), (0x0DF0, B::AL), (0x0DF1, B::AL), (0x0DF2, B::CM),
    (0x0DF3, B::CM), (0x0E31, B::CM), (0x0E32, B::AL), (0x0E33, B::AL),
    (0x0E3F, B::PR), (0x0E4F, B::AL), (0x0E5A, B::BA), (0x0E5B, B::BA),
    (0x0EB1, B::CM), (0x0EB2, B::AL), (0x0EB3, B::AL), (0x0EBA, B::AL),
    (0x0EBB, B::CM), (0x0EBC, B::CM), (0x0ECE, B::AL), (0x0ECF, B::AL),
    (0x0F05, B::AL), (0x0F06, B::BB), (0x0F07, B::BB), (0x0F08, B::GL),
    (0x0F09, B::BB), (0x0F0A, B::BB), (0x0F0B, B::BA), (0x0F0C, B::GL),
    (0x0F12, B::GL), (0x0F13, B::AL), (0x0F14, B::EX), (0x0F18, B::CM),
    (0x0F19, B::CM), (0x0F34, B::BA), (0x0F35, B::CM), (0x0F36, B::AL),
    (0x0F37, B::CM), (0x0F38, B::AL), (0x0F39, B::CM), (0x0F3A, B::OP),
    (0x0F3B, B::CL), (0x0F3C, B::OP), (0x0F3D, B::CL), (0x0F3E, B::CM),
    (0x0F3F, B::CM), (0x0F7F, B::BA), (0x0F85, B::BA), (0x0F86, B::CM),
    (0x0F87, B::CM), (0x0F98, B::AL), (0x0FBD, B::AL), (0x0FBE, B::BA),
    (0x0FBF, B::BA), (0x0FC6, B::CM), (0x0FD0, B::BB), (0x0FD1, B::BB),
    (0x0FD2, B::BA), (0x0FD3, B::BB), (0x0FD9, B::GL), (0x0FDA, B::GL),
    (0x103F, B::AL), (0x104A, B::BA), (0x104B, B::BA), (0x1061, B::AL),
    (0x1065, B::AL), (0x1066, B::AL), (0x108E, B::AL), (0x108F, B::CM),
    (0x1360, B::AL), (0x1361, B::BA), (0x1400, B::BA), (0x1680, B::BA),
    (0x169B, B::OP), (0x169C, B::CL), (0x1735, B::BA), (0x1736, B::BA),
    (0x1752, B::CM), (0x1753, B::CM), (0x1772, B::CM), (0x1773, B::CM),
    (0x17D4, B::BA), (0x17D5, B::BA), (0x17D6, B::NS), (0x17D7, B::AL),
    (0x17D8, B::BA), (0x17D9, B::AL), (0x17DA, B::BA), (0x17DB, B::PR),
    (0x17DC, B::AL), (0x17DD, B::CM), (0x17DE, B::AL), (0x17DF, B::AL),
    (0x1802, B::EX), (0x1803, B::EX), (0x1804, B::BA), (0x1805, B::BA),
    (0x1806, B::BB), (0x1807, B::AL), (0x1808, B::EX), (0x1809, B::EX),
    (0x180A, B::AL), (0x180E, B::GL), (0x180F, B::AL), (0x1885, B::CM),
    (0x1886, B::CM), (0x18A9, B::CM), (0x1944, B::EX), (0x1945, B::EX),
    (0x1A5F, B::AL), (0x1A7D, B::AL), (0x1A7E, B::AL), (0x1A7F, B::CM),
    (0x1B5A, B::BA), (0x1B5B, B::BA), (0x1B5C, B::AL), (0x1BAE, B::AL),
    (0x1BAF, B::AL), (0x1C7E, B::BA), (0x1C7F, B::BA), (0x1CD3, B::AL),
    (0x1CED, B::CM), (0x1CF5, B::AL), (0x1CF6, B::AL), (0x1DFA, B::AL),
    (0x1FFD, B::BB), (0x1FFE, B::AL), (0x1FFF, B::AL), (0x2007, B::GL),
    (0x200B, B::ZW), (0x200C, B::CM), (0x200D, B::ZWJ), (0x200E, B::CM),
    (0x200F, B::CM), (0x2010, B::BA), (0x2011, B::GL), (0x2012, B::BA),
    (0x2013, B::BA), (0x2014, B::B2), (0x2018, B::QU), (0x2019, B::QU),
    (0x201A, B::OP), (0x201E, B::OP), (0x201F, B::QU), (0x2027, B::BA),
    (0x2028, B::BK), (0x2029, B::BK), (0x202F, B::GL), (0x2038, B::AL),
    (0x2039, B::QU), (0x203A, B::QU), (0x203B, B::AL), (0x203C, B::NS),
    (0x203D, B::NS), (0x2044, B::IS), (0x2045, B::OP), (0x2046, B::CL),
    (0x2056, B::BA), (0x2057, B::AL), (0x205C, B::AL), (0x2060, B::WJ),
    (0x207D, B::OP), (0x207E, B::CL), (0x208D, B::OP), (0x208E, B::CL),
    (0x20A7, B::PO), (0x20B6, B::PO), (0x20BB, B::PO), (0x20BC, B::PR),
    (0x20BD, B::PR), (0x20BE, B::PO), (0x2103, B::PO), (0x2109, B::PO),
    (0x2116, B::PR), (0x2212, B::PR), (0x2213, B::PR), (0x22EF, B::IN),
    (0x2308, B::OP), (0x2309, B::CL), (0x230A, B::OP), (0x230B, B::CL),
    (0x231A, B::ID), (0x231B, B::ID), (0x2329, B::OP), (0x232A, B::CL),
    (0x2614, B::ID), (0x2615, B::ID), (0x2616, B::AL), (0x2617, B::AL),
    (0x2618, B::ID), (0x2619, B::AL), (0x261D, B::EB), (0x261E, B::ID),
    (0x261F, B::ID), (0x2668, B::ID), (0x267F, B::ID), (0x26CD, B::ID),
    (0x26CE, B::AL), (0x26D2, B::AL), (0x26D3, B::ID), (0x26D4, B::ID),
    (0x26D8, B::ID), (0x26D9, B::ID), (0x26DA, B::AL), (0x26DB, B::AL),
    (0x26DC, B::ID), (0x26DD, B::AL), (0x26DE, B::AL), (0x26EA, B::ID),
    (0x26F6, B::AL), (0x26F7, B::ID), (0x26F8, B::ID), (0x26F9, B::EB),
    (0x26FA, B::ID), (0x26FB, B::AL), (0x26FC, B::AL), (0x2708, B::ID),
    (0x2709, B::ID), (0x2761, B::AL), (0x2762, B::EX), (0x2763, B::EX),
    (0x2764, B::ID), (0x2768, B::OP), (0x2769, B::CL), (0x276A, B::OP),
    (0x276B, B::CL), (0x276C, B::OP), (0x276D, B::CL), (0x276E, B::OP),
    (0x276F, B::CL), (0x2770, B::OP), (0x2771, B::CL), (0x2772, B::OP),
    (0x2773, B::CL), (0x2774, B::OP), (0x2775, B::CL), (0x27C5, B::OP),
    (0x27C6, B::CL), (0x27E6, B::OP), (0x27E7, B::CL), (0x27E8, B::OP),
    (0x27E9, B::CL), (0x27EA, B::OP), (0x27EB, B::CL), (0x27EC, B::OP),
    (0x27ED, B::CL), (0x27EE, B::OP), (0x27EF, B::CL), (0x2983, B::OP),
    (0x2984, B::CL), (0x2985, B::OP), (0x2986, B::CL), (0x2987, B::OP),
    (0x2988, B::CL), (0x2989, B::OP), (0x298A, B::CL), (0x298B, B::OP),
    (0x298C, B::CL), (0x298D, B::OP), (0x298E, B::CL), (0x298F, B::OP),
    (0x2990, B::CL), (0x2991, B::OP), (0x2992, B::CL), (0x2993, B::OP),
    (0x2994, B::CL), (0x2995, B::OP), (0x2996, B::CL), (0x2997, B::OP),
    (0x2998, B::CL), (0x29D8, B::OP), (0x29D9, B::CL), (0x29DA, B::OP),
    (0x29DB, B::CL), (0x29FC, B::OP), (0x29FD, B::CL), (0x2CF9, B::EX),
    (0x2CFD, B::AL), (0x2CFE, B::EX), (0x2CFF, B::BA), (0x2D70, B::BA),
    (0x2D7F, B::CM), (0x2E16, B::AL), (0x2E17, B::BA), (0x2E18, B::OP),
    (0x2E19, B::BA), (0x2E1A, B::AL), (0x2E1B, B::AL), (0x2E1C, B::QU),
    (0x2E1D, B::QU), (0x2E1E, B::AL), (0x2E1F, B::AL), (0x2E20, B::QU),
    (0x2E21, B::QU), (0x2E22, B::OP), (0x2E23, B::CL), (0x2E24, B::OP),
    (0x2E25, B::CL), (0x2E26, B::OP), (0x2E27, B::CL), (0x2E28, B::OP),
    (0x2E29, B::CL), (0x2E2E, B::EX), (0x2E2F, B::AL), (0x2E30, B::BA),
    (0x2E31, B::BA), (0x2E32, B::AL), (0x2E33, B::BA), (0x2E34, B::BA),
    (0x2E3A, B::B2), (0x2E3B, B::B2), (0x2E3F, B::AL), (0x2E40, B::BA),
    (0x2E41, B::BA), (0x2E42, B::OP), (0x2E9A, B::AL), (0x3000, B::BA),
    (0x3001, B::CL), (0x3002, B::CL), (0x3003, B::ID), (0x3004, B::ID),
    (0x3005, B::NS), (0x3006, B::ID), (0x3007, B::ID), (0x3008, B::OP),
    (0x3009, B::CL), (0x300A, B::OP), (0x300B, B::CL), (0x300C, B::OP),
    (0x300D, B::CL), (0x300E, B::OP), (0x300F, B::CL), (0x3010, B::OP),
    (0x3011, B::CL), (0x3012, B::ID), (0x3013, B::ID), (0x3014, B::OP),
    (0x3015, B::CL), (0x3016, B::OP), (0x3017, B::CL), (0x3018, B::OP),
    (0x3019, B::CL), (0x301A, B::OP), (0x301B, B::CL), (0x301C, B::NS),
    (0x301D, B::OP), (0x301E, B::CL), (0x301F, B::CL), (0x3035, B::CM),
    (0x303B, B::NS), (0x303C, B::NS), (0x3040, B::AL), (0x3041, B::NS),
    (0x3042, B::ID), (0x3043, B::NS), (0x3044, B::ID), (0x3045, B::NS),
    (0x3046, B::ID), (0x3047, B::NS), (0x3048, B::ID), (0x3049, B::NS),
    (0x3063, B::NS), (0x3083, B::NS), (0x3084, B::ID), (0x3085, B::NS),
    (0x3086, B::ID), (0x3087, B::NS), (0x308E, B::NS), (0x3095, B::NS),
    (0x3096, B::NS), (0x3097, B::AL), (0x3098, B::AL), (0x3099, B::CM),
    (0x309A, B::CM), (0x309F, B::ID), (0x30A0, B::NS), (0x30A1, B::NS),
    (0x30A2, B::ID), (0x30A3, B::NS), (0x30A4, B::ID), (0x30A5, B::NS),
    (0x30A6, B::ID), (0x30A7, B::NS), (0x30A8, B::ID), (0x30A9, B::NS),
    (0x30C3, B::NS), (0x30E3, B::NS), (0x30E4, B::ID), (0x30E5, B::NS),
    (0x30E6, B::ID), (0x30E7, B::NS), (0x30EE, B::NS), (0x30F5, B::NS),
    (0x30F6, B::NS), (0x30FF, B::ID), (0x312F, B::AL), (0x3130, B::AL),
    (0x318F, B::AL), (0x321F, B::AL), (0x32FF, B::AL), (0xA015, B::NS),
    (0xA4FE, B::BA), (0xA4FF, B::BA), (0xA60D, B::BA), (0xA60E, B::EX),
    (0xA60F, B::BA), (0xA673, B::AL), (0xA69E, B::CM), (0xA69F, B::CM),
    (0xA6F0, B::CM), (0xA6F1, B::CM), (0xA6F2, B::AL), (0xA802, B::CM),
    (0xA806, B::CM), (0xA80B, B::CM), (0xA838, B::PO), (0xA874, B::BB),
    (0xA875, B::BB), (0xA876, B::EX), (0xA877, B::EX), (0xA880, B::CM),
    (0xA881, B::CM), (0xA8CE, B::BA), (0xA8CF, B::BA), (0xA8FC, B::BB),
    (0xA92E, B::BA), (0xA92F, B::BA), (0xA9E5, B::CM), (0xAA43, B::CM),
    (0xAA4C, B::CM), (0xAA4D, B::CM), (0xAA4E, B::AL), (0xAA4F, B::AL),
    (0xAAB0, B::CM), (0xAAB1, B::AL), (0xAAB5, B::AL), (0xAAB6, B::AL),
    (0xAAB7, B::CM), (0xAAB8, B::CM), (0xAABE, B::CM), (0xAABF, B::CM),
    (0xAAC0, B::AL), (0xAAC1, B::CM), (0xAAF0, B::BA), (0xAAF1, B::BA),
    (0xAAF5, B::CM), (0xAAF6, B::CM), (0xABEB, B::BA), (0xABEC, B::CM),
    (0xABED, B::CM), (0xABEE, B::AL), (0xABEF, B::AL), (0xAC00, B::H2),
    (0xAC1C, B::H2), (0xAC38, B::H2), (0xAC54, B::H2), (0xAC70, B::H2),
    (0xAC8C, B::H2), (0xACA8, B::H2), (0xACC4, B::H2), (0xACE0, B::H2),
    (0xACFC, B::H2), (0xAD18, B::H2), (0xAD34, B::H2), (0xAD50, B::H2),
    (0xAD6C, B::H2), (0xAD88, B::H2), (0xADA4, B::H2), (0xADC0, B::H2),
    (0xADDC, B::H2), (0xADF8, B::H2), (0xAE14, B::H2), (0xAE30, B::H2),
    (0xAE4C, B::H2), (0xAE68, B::H2), (0xAE84, B::H2), (0xAEA0, B::H2),
    (0xAEBC, B::H2), (0xAED8, B::H2), (0xAEF4, B::H2), (0xAF10, B::H2),
    (0xAF2C, B::H2), (0xAF48, B::H2), (0xAF64, B::H2), (0xAF80, B::H2),
    (0xAF9C, B::H2), (0xAFB8, B::H2), (0xAFD4, B::H2), (0xAFF0, B::H2),
    (0xB00C, B::H2), (0xB028, B::H2), (0xB044, B::H2), (0xB060, B::H2),
    (0xB07C, B::H2), (0xB098, B::H2), (0xB0B4, B::H2), (0xB0D0, B::H2),
    (0xB0EC, B::H2), (0xB108, B::H2), (0xB124, B::H2), (0xB140, B::H2),
    (0xB15C, B::H2), (0xB178, B::H2), (0xB194, B::H2), (0xB1B0, B::H2),
    (0xB1CC, B::H2), (0xB1E8, B::H2), (0xB204, B::H2), (0xB220, B::H2),
    (0xB23C, B::H2), (0xB258, B::H2), (0xB274, B::H2), (0xB290, B::H2),
    (0xB2AC, B::H2), (0xB2C8, B::H2), (0xB2E4, B::H2), (0xB300, B::H2),
    (0xB31C, B::H2), (0xB338, B::H2), (0xB354, B::H2), (0xB370, B::H2),
    (0xB38C, B::H2), (0xB3A8, B::H2), (0xB3C4, B::H2), (0xB3E0, B::H2),
    (0xB3FC, B::H2), (0xB418, B::H2), (0xB434, B::H2), (0xB450, B::H2),
    (0xB46C, B::H2), (0xB488, B::H2), (0xB4A4, B::H2), (0xB4C0, B::H2),
    (0xB4DC, B::H2), (0xB4F8, B::H2), (0xB514, B::H2), (0xB530, B::H2),
    (0xB54C, B::H2), (0xB568, B::H2), (0xB584, B::H2), (0xB5A0, B::H2),
    (0xB5BC, B::H2), (0xB5D8, B::H2), (0xB5F4, B::H2), (0xB610, B::H2),
    (0xB62C, B::H2), (0xB648, B::H2), (0xB664, B::H2), (0xB680, B::H2),
    (0xB69C, B::H2), (0xB6B8, B::H2), (0xB6D4, B::H2), (0xB6F0, B::H2),
    (0xB70C, B::H2), (0xB728, B::H2), (0xB744, B::H2), (0xB760, B::H2),
    (0xB77C, B::H2), (0xB798, B::H2), (0xB7B4, B::H2), (0xB7D0, B::H2),
    (0xB7EC, B::H2), (0xB808, B::H2), (0xB824, B::H2), (0xB840, B::H2),
    (0xB85C, B::H2), (0xB878, B::H2), (0xB894, B::H2), (0xB8B0, B::H2),
    (0xB8CC, B::H2), (0xB8E8, B::H2), (0xB904, B::H2), (0xB920, B::H2),
    (0xB93C, B::H2), (0xB958, B::H2), (0xB974, B::H2), (0xB990, B::H2),
    (0xB9AC, B::H2), (0xB9C8, B::H2), (0xB9E4, B::H2), (0xBA00, B::H2),
    (0xBA1C, B::H2), (0xBA38, B::H2), (0xBA54, B::H2), (0xBA70, B::H2),
    (0xBA8C, B::H2), (0xBAA8, B::H2), (0xBAC4, B::H2), (0xBAE0, B::H2),
    (0xBAFC, B::H2), (0xBB18, B::H2), (0xBB34, B::H2), (0xBB50, B::H2),
    (0xBB6C, B::H2), (0xBB88, B::H2), (0xBBA4, B::H2), (0xBBC0, B::H2),
    (0xBBDC, B::H2), (0xBBF8, B::H2), (0xBC14, B::H2), (0xBC30, B::H2),
    (0xBC4C, B::H2), (0xBC68, B::H2), (0xBC84, B::H2), (0xBCA0, B::H2),
    (0xBCBC, B::H2), (0xBCD8, B::H2), (0xBCF4, B::H2), (0xBD10, B::H2),
    (0xBD2C, B::H2), (0xBD48, B::H2), (0xBD64, B::H2), (0xBD80, B::H2),
    (0xBD9C, B::H2), (0xBDB8, B::H2), (0xBDD4, B::H2), (0xBDF0, B::H2),
    (0xBE0C, B::H2), (0xBE28, B::H2), (0xBE44, B::H2), (0xBE60, B::H2),
    (0xBE7C, B::H2), (0xBE98, B::H2), (0xBEB4, B::H2), (0xBED0, B::H2),
    (0xBEEC, B::H2), (0xBF08, B::H2), (0xBF24, B::H2), (0xBF40, B::H2),
    (0xBF5C, B::H2), (0xBF78, B::H2), (0xBF94, B::H2), (0xBFB0, B::H2),
    (0xBFCC, B::H2), (0xBFE8, B::H2), (0xC004, B::H2), (0xC020, B::H2),
    (0xC03C, B::H2), (0xC058, B::H2), (0xC074, B::H2), (0xC090, B::H2),
    (0xC0AC, B::H2), (0xC0C8, B::H2), (0xC0E4, B::H2), (0xC100, B::H2),
    (0xC11C, B::H2), (0xC138, B::H2), (0xC154, B::H2), (0xC170, B::H2),
    (0xC18C, B::H2), (0xC1A8, B::H2), (0xC1C4, B::H2), (0xC1E0, B::H2),
    (0xC1FC, B::H2), (0xC218, B::H2), (0xC234, B::H2), (0xC250, B::H2),
    (0xC26C, B::H2), (0xC288, B::H2), (0xC2A4, B::H2), (0xC2C0, B::H2),
    (0xC2DC, B::H2), (0xC2F8, B::H2), (0xC314, B::H2), (0xC330, B::H2),
    (0xC34C, B::H2), (0xC368, B::H2), (0xC384, B::H2), (0xC3A0, B::H2),
    (0xC3BC, B::H2), (0xC3D8, B::H2), (0xC3F4, B::H2), (0xC410, B::H2),
    (0xC42C, B::H2), (0xC448, B::H2), (0xC464, B::H2), (0xC480, B::H2),
    (0xC49C, B::H2), (0xC4B8, B::H2), (0xC4D4, B::H2), (0xC4F0, B::H2),
    (0xC50C, B::H2), (0xC528, B::H2), (0xC544, B::H2), (0xC560, B::H2),
    (0xC57C, B::H2), (0xC598, B::H2), (0xC5B4, B::H2), (0xC5D0, B::H2),
    (0xC5EC, B::H2), (0xC608, B::H2), (0xC624, B::H2), (0xC640, B::H2),
    (0xC65C, B::H2), (0xC678, B::H2), (0xC694, B::H2), (0xC6B0, B::H2),
    (0xC6CC, B::H2), (0xC6E8, B::H2), (0xC704, B::H2), (0xC720, B::H2),
    (0xC73C, B::H2), (0xC758, B::H2), (0xC774, B::H2), (0xC790, B::H2),
    (0xC7AC, B::H2), (0xC7C8, B::H2), (0xC7E4, B::H2), (0xC800, B::H2),
    (0xC81C, B::H2), (0xC838, B::H2), (0xC854, B::H2), (0xC870, B::H2),
    (0xC88C, B::H2), (0xC8A8, B::H2), (0xC8C4, B::H2), (0xC8E0, B::H2),
    (0xC8FC, B::H2), (0xC918, B::H2), (0xC934, B::H2), (0xC950, B::H2),
    (0xC96C, B::H2), (0xC988, B::H2), (0xC9A4, B::H2), (0xC9C0, B::H2),
    (0xC9DC, B::H2), (0xC9F8, B::H2), (0xCA14, B::H2), (0xCA30, B::H2),
    (0xCA4C, B::H2), (0xCA68, B::H2), (0xCA84, B::H2), (0xCAA0, B::H2),
    (0xCABC, B::H2), (0xCAD8, B::H2), (0xCAF4, B::H2), (0xCB10, B::H2),
    (0xCB2C, B::H2), (0xCB48, B::H2), (0xCB64, B::H2), (0xCB80, B::H2),
    (0xCB9C, B::H2), (0xCBB8, B::H2), (0xCBD4, B::H2), (0xCBF0, B::H2),
    (0xCC0C, B::H2), (0xCC28, B::H2), (0xCC44, B::H2), (0xCC60, B::H2),
    (0xCC7C, B::H2), (0xCC98, B::H2), (0xCCB4, B::H2), (0xCCD0, B::H2),
    (0xCCEC, B::H2), (0xCD08, B::H2), (0xCD24, B::H2), (0xCD40, B::H2),
    (0xCD5C, B::H2), (0xCD78, B::H2), (0xCD94, B::H2), (0xCDB0, B::H2),
    (0xCDCC, B::H2), (0xCDE8, B::H2), (0xCE04, B::H2), (0xCE20, B::H2),
    (0xCE3C, B::H2), (0xCE58, B::H2), (0xCE74, B::H2), (0xCE90, B::H2),
    (0xCEAC, B::H2), (0xCEC8, B::H2), (0xCEE4, B::H2), (0xCF00, B::H2),
    (0xCF1C, B::H2), (0xCF38, B::H2), (0xCF54, B::H2), (0xCF70, B::H2),
    (0xCF8C, B::H2), (0xCFA8, B::H2), (0xCFC4, B::H2), (0xCFE0, B::H2),
    (0xCFFC, B::H2), (0xD018, B::H2), (0xD034, B::H2), (0xD050, B::H2),
    (0xD06C, B::H2), (0xD088, B::H2), (0xD0A4, B::H2), (0xD0C0, B::H2),
    (0xD0DC, B::H2), (0xD0F8, B::H2), (0xD114, B::H2), (0xD130, B::H2),
    (0xD14C, B::H2), (0xD168, B::H2), (0xD184, B::H2), (0xD1A0, B::H2),
    (0xD1BC, B::H2), (0xD1D8, B::H2), (0xD1F4, B::H2), (0xD210, B::H2),
    (0xD22C, B::H2), (0xD248, B::H2), (0xD264, B::H2), (0xD280, B::H2),
    (0xD29C, B::H2), (0xD2B8, B::H2), (0xD2D4, B::H2), (0xD2F0, B::H2),
    (0xD30C, B::H2), (0xD328, B::H2), (0xD344, B::H2), (0xD360, B::H2),
    (0xD37C, B::H2), (0xD398, B::H2), (0xD3B4, B::H2), (0xD3D0, B::H2),
    (0xD3EC, B::H2), (0xD408, B::H2), (0xD424, B::H2), (0xD440, B::H2),
    (0xD45C, B::H2), (0xD478, B::H2), (0xD494, B::H2), (0xD4B0, B::H2),
    (0xD4CC, B::H2), (0xD4E8, B::H2), (0xD504, B::H2), (0xD520, B::H2),
    (0xD53C, B::H2), (0xD558, B::H2), (0xD574, B::H2), (0xD590, B::H2),
    (0xD5AC, B::H2), (0xD5C8, B::H2), (0xD5E4, B::H2), (0xD600, B::H2),
    (0xD61C, B::H2), (0xD638, B::H2), (0xD654, B::H2), (0xD670, B::H2),
    (0xD68C, B::H2), (0xD6A8, B::H2), (0xD6C4, B::H2), (0xD6E0, B::H2),
    (0xD6FC, B::H2), (0xD718, B::H2), (0xD734, B::H2), (0xD750, B::H2),
    (0xD76C, B::H2), (0xD788, B::H2), (0xFB1D, B::HL), (0xFB1E, B::CM),
    (0xFB29, B::AL), (0xFB37, B::AL), (0xFB3D, B::AL), (0xFB3E, B::HL),
    (0xFB3F, B::AL), (0xFB40, B::HL), (0xFB41, B::HL), (0xFB42, B::AL),
    (0xFB43, B::HL), (0xFB44, B::HL), (0xFB45, B::AL), (0xFD3E, B::CL),
    (0xFD3F, B::OP), (0xFDFC, B::PO), (0xFE10, B::IS), (0xFE11, B::CL),
    (0xFE12, B::CL), (0xFE13, B::IS), (0xFE14, B::IS), (0xFE15, B::EX),
    (0xFE16, B::EX), (0xFE17, B::OP), (0xFE18, B::CL), (0xFE19, B::IN),
    (0xFE35, B::OP), (0xFE36, B::CL), (0xFE37, B::OP), (0xFE38, B::CL),
    (0xFE39, B::OP), (0xFE3A, B::CL), (0xFE3B, B::OP), (0xFE3C, B::CL),
    (0xFE3D, B::OP), (0xFE3E, B::CL), (0xFE3F, B::OP), (0xFE40, B::CL),
    (0xFE41, B::OP), (0xFE42, B::CL), (0xFE43, B::OP), (0xFE44, B::CL),
    (0xFE45, B::ID), (0xFE46, B::ID), (0xFE47, B::OP), (0xFE48, B::CL),
    (0xFE50, B::CL), (0xFE51, B::ID), (0xFE52, B::CL), (0xFE53, B::AL),
    (0xFE54, B::NS), (0xFE55, B::NS), (0xFE56, B::EX), (0xFE57, B::EX),
    (0xFE58, B::ID), (0xFE59, B::OP), (0xFE5A, B::CL), (0xFE5B, B::OP),
    (0xFE5C, B::CL), (0xFE5D, B::OP), (0xFE5E, B::CL), (0xFE67, B::AL),
    (0xFE68, B::ID), (0xFE69, B::PR), (0xFE6A, B::PO), (0xFE6B, B::ID),
    (0xFEFF, B::WJ), (0xFF00, B::AL), (0xFF01, B::EX), (0xFF02, B::ID),
    (0xFF03, B::ID), (0xFF04, B::PR), (0xFF05, B::PO), (0xFF06, B::ID),
    (0xFF07, B::ID), (0xFF08, B::OP), (0xFF09, B::CL), (0xFF0A, B::ID),
    (0xFF0B, B::ID), (0xFF0C, B::CL), (0xFF0D, B::ID), (0xFF0E, B::CL),
    (0xFF1A, B::NS), (0xFF1B, B::NS), (0xFF1F, B::EX), (0xFF3B, B::OP),
    (0xFF3C, B::ID), (0xFF3D, B::CL), (0xFF5B, B::OP), (0xFF5C, B::ID),
    (0xFF5D, B::CL), (0xFF5E, B::ID), (0xFF5F, B::OP), (0xFF60, B::CL),
    (0xFF61, B::CL), (0xFF62, B::OP), (0xFF63, B::CL), (0xFF64, B::CL),
    (0xFF65, B::NS), (0xFF66, B::ID), (0xFF9E, B::NS), (0xFF9F, B::NS),
    (0xFFC8, B::AL), (0xFFC9, B::AL), (0xFFD0, B::AL), (0xFFD1, B::AL),
    (0xFFD8, B::AL), (0xFFD9, B::AL), (0xFFE0, B::PO), (0xFFE1, B::PR),
    (0xFFE5, B::PR), (0xFFE6, B::PR), (0xFFFC, B::CB), (0x101FD, B::CM),
    (0x102E0, B::CM), (0x1039F, B::BA), (0x103D0, B::BA), (0x10857, B::BA),
    (0x1091F, B::BA), (0x10A04, B::AL), (0x10A05, B::CM), (0x10A06, B::CM),
    (0x10A3F, B::CM), (0x10AE5, B::CM), (0x10AE6, B::CM), (0x10AF6, B::IN),
    (0x11047, B::BA), (0x11048, B::BA), (0x11135, B::AL), (0x11173, B::CM),
    (0x11174, B::AL), (0x11175, B::BB), (0x111C5, B::BA), (0x111C6, B::BA),
    (0x111C7, B::AL), (0x111C8, B::BA), (0x111C9, B::AL), (0x111DA, B::AL),
    (0x111DB, B::BB), (0x111DC, B::AL), (0x11238, B::BA), (0x11239, B::BA),
    (0x1123A, B::AL), (0x1123B, B::BA), (0x1123C, B::BA), (0x1123D, B::AL),
    (0x1123E, B::CM), (0x112A9, B::BA), (0x1133C, B::CM), (0x1133D, B::AL),
    (0x11345, B::AL), (0x11346, B::AL), (0x11347, B::CM), (0x11348, B::CM),
    (0x11349, B::AL), (0x1134A, B::AL), (0x11357, B::CM), (0x11362, B::CM),
    (0x11363, B::CM), (0x11364, B::AL), (0x11365, B::AL), (0x1144F, B::AL),
    (0x1145A, B::AL), (0x1145B, B::BA), (0x115B6, B::AL), (0x115B7, B::AL),
    (0x115C1, B::BB), (0x115C2, B::BA), (0x115C3, B::BA), (0x115C4, B::EX),
    (0x115C5, B::EX), (0x115DC, B::CM), (0x115DD, B::CM), (0x11641, B::BA),
    (0x11642, B::BA), (0x1173A, B::AL), (0x1173B, B::AL), (0x11A3A, B::AL),
    (0x11A3F, B::BB), (0x11A40, B::AL), (0x11A45, B::BB), (0x11A46, B::AL),
    (0x11A47, B::CM), (0x11A9D, B::AL), (0x11AA1, B::BA), (0x11AA2, B::BA),
    (0x11C37, B::AL), (0x11C40, B::AL), (0x11C70, B::BB), (0x11C71, B::EX),
    (0x11CA8, B::AL), (0x11D3A, B::CM), (0x11D3B, B::AL), (0x11D3C, B::CM),
    (0x11D3D, B::CM), (0x11D3E, B::AL), (0x11D46, B::AL), (0x11D47, B::CM),
    (0x13282, B::CL), (0x13286, B::OP), (0x13287, B::CL), (0x13288, B::OP),
    (0x13289, B::CL), (0x13379, B::OP), (0x1337A, B::CL), (0x1337B, B::CL),
    (0x145CE, B::OP), (0x145CF, B::CL), (0x16A6E, B::BA), (0x16A6F, B::BA),
    (0x16AF5, B::BA), (0x16B44, B::BA), (0x16FE0, B::NS), (0x16FE1, B::NS),
    (0x1BC9D, B::CM), (0x1BC9E, B::CM), (0x1BC9F, B::BA), (0x1D183, B::AL),
    (0x1D184, B::AL), (0x1DA75, B::CM), (0x1DA84, B::CM), (0x1DA85, B::AL),
    (0x1DA86, B::AL), (0x1DAA0, B::AL), (0x1E007, B::AL), (0x1E019, B::AL),
    (0x1E01A, B::AL), (0x1E022, B::AL), (0x1E023, B::CM), (0x1E024, B::CM),
    (0x1E025, B::AL), (0x1E95E, B::OP), (0x1E95F, B::OP), (0x1F12F, B::ID),
    (0x1F385, B::EB), (0x1F39C, B::AL), (0x1F39D, B::AL), (0x1F3B5, B::AL),
    (0x1F3B6, B::AL), (0x1F3BC, B::AL), (0x1F3C5, B::ID), (0x1F3C6, B::ID),
    (0x1F3C7, B::EB), (0x1F3C8, B::ID), (0x1F3C9, B::ID), (0x1F442, B::EB),
    (0x1F443, B::EB), (0x1F444, B::ID), (0x1F445, B::ID), (0x1F46E, B::EB),
    (0x1F46F, B::ID), (0x1F47C, B::EB), (0x1F484, B::ID), (0x1F4A0, B::AL),
    (0x1F4A1, B::ID), (0x1F4A2, B::AL), (0x1F4A3, B::ID), (0x1F4A4, B::AL),
    (0x1F4AA, B::EB), (0x1F4AF, B::AL), (0x1F4B0, B::ID), (0x1F4B1, B::AL),
    (0x1F4B2, B::AL), (0x1F574, B::EB), (0x1F575, B::EB), (0x1F57A, B::EB),
    (0x1F590, B::EB), (0x1F595, B::EB), (0x1F596, B::EB), (0x1F6A3, B::EB),
    (0x1F6C0, B::EB), (0x1F6CC, B::EB), (0x1F91D, B::ID), (0x1F91E, B::EB),
    (0x1F91F, B::EB), (0x1F926, B::EB), (0x1F93D, B::EB), (0x1F93E, B::EB),
    (0x1FFFE, B::AL), (0x1FFFF, B::AL), (0x2FFFE, B::AL), (0x2FFFF, B::AL),
    (0xE0001, B::CM),
];

pub(super) static RANGES: &[(u32, B)] = &[
    (0x002F, B::CM), (0x003B, B::NU), (0x007E, B::AL), (0x00A2, B::CM),
    (0x00A5, B::PR), (0x02FF, B::AL), (0x035B, B::CM), (0x0362, B::GL),
    (0x036F, B::CM), (0x0482, B::AL), (0x0489, B::CM), (0x0590, B::AL),
    (0x05C7, B::CM), (0x05CF, B::AL), (0x05EA, B::HL), (0x05EF, B::AL),
    (0x05F2, B::HL), (0x0608, B::AL), (0x060F, B::PO), (0x061F, B::CM),
    (0x064A, B::AL), (0x065F, B::CM), (0x066C, B::NU), (0x06D5, B::AL),
    (0x06EF, B::CM), (0x06F9, B::NU), (0x072F, B::AL), (0x074A, B::CM),
    (0x07A5, B::AL), (0x07B0, B::CM), (0x07BF, B::AL), (0x07C9, B::NU),
    (0x07EA, B::AL), (0x07F3, B::CM), (0x0815, B::AL), (0x082D, B::CM),
    (0x0858, B::AL), (0x085B, B::CM), (0x08D3, B::AL), (0x0903, B::CM),
    (0x0939, B::AL), (0x0957, B::CM), (0x0965, B::AL), (0x096F, B::NU),
    (0x0980, B::AL), (0x0983, B::CM), (0x09BD, B::AL), (0x09CD, B::CM),
    (0x09E5, B::AL), (0x09F3, B::NU), (0x0A00, B::AL), (0x0A03, B::CM),
    (0x0A3D, B::AL), (0x0A42, B::CM), (0x0A4A, B::AL), (0x0A4D, B::CM),
    (0x0A65, B::AL), (0x0A71, B::NU), (0x0A80, B::AL), (0x0A83, B::CM),
    (0x0ABD, B::AL), (0x0ACD, B::CM), (0x0AE5, B::AL), (0x0AF1, B::NU),
    (0x0AF9, B::AL), (0x0B03, B::CM), (0x0B3D, B::AL), (0x0B4D, B::CM),
    (0x0B65, B::AL), (0x0B6F, B::NU), (0x0BBD, B::AL), (0x0BC2, B::CM),
    (0x0BC5, B::AL), (0x0BCD, B::CM), (0x0BE5, B::AL), (0x0BEF, B::NU),
    (0x0BFF, B::AL), (0x0C03, B::CM), (0x0C3D, B::AL), (0x0C4D, B::CM),
    (0x0C65, B::AL), (0x0C6F, B::NU), (0x0C80, B::AL), (0x0C83, B::CM),
    (0x0CBD, B::AL), (0x0CCD, B::CM), (0x0CE5, B::AL), (0x0CEF, B::NU),
    (0x0CFF, B::AL), (0x0D03, B::CM), (0x0D3D, B::AL), (0x0D4D, B::CM),
    (0x0D65, B::AL), (0x0D6F, B::NU), (0x0DCE, B::AL), (0x0DDF, B::CM),
    (0x0DE5, B::AL), (0x0DF3, B::NU), (0x0E33, B::AL), (0x0E3A, B::CM),
    (0x0E46, B::AL), (0x0E4F, B::CM), (0x0E5B, B::NU), (0x0EB3, B::AL),
    (0x0EBC, B::CM), (0x0EC7, B::AL), (0x0ECF, B::CM), (0x0ED9, B::NU),
    (0x0F00, B::AL), (0x0F0C, B::BB), (0x0F14, B::EX), (0x0F1F, B::AL),
    (0x0F29, B::NU), (0x0F70, B::AL), (0x0F87, B::CM), (0x0F8C, B::AL),
    (0x0FBF, B::CM), (0x102A, B::AL), (0x103F, B::CM), (0x104B, B::NU),
    (0x1055, B::AL), (0x1059, B::CM), (0x105D, B::AL), (0x106D, B::CM),
    (0x1070, B::AL), (0x1074, B::CM), (0x1081, B::AL), (0x108F, B::CM),
    (0x1099, B::NU), (0x109D, B::CM), (0x10FF, B::AL), (0x115F, B::JL),
    (0x11A7, B::JV), (0x11FF, B::JT), (0x135C, B::AL), (0x1361, B::CM),
    (0x16EA, B::AL), (0x16ED, B::BA), (0x1711, B::AL), (0x1714, B::CM),
    (0x1731, B::AL), (0x1736, B::CM), (0x17B3, B::AL), (0x17DF, B::CM),
    (0x17E9, B::NU), (0x180A, B::AL), (0x180F, B::CM), (0x1819, B::NU),
    (0x191F, B::AL), (0x192B, B::CM), (0x192F, B::AL), (0x193B, B::CM),
    (0x1945, B::AL), (0x194F, B::NU), (0x19CF, B::AL), (0x19D9, B::NU),
    (0x1A16, B::AL), (0x1A1B, B::CM), (0x1A54, B::AL), (0x1A7F, B::CM),
    (0x1A89, B::NU), (0x1A8F, B::AL), (0x1A99, B::NU), (0x1AAF, B::AL),
    (0x1ABE, B::CM), (0x1AFF, B::AL), (0x1B04, B::CM), (0x1B33, B::AL),
    (0x1B44, B::CM), (0x1B4F, B::AL), (0x1B5C, B::NU), (0x1B60, B::BA),
    (0x1B6A, B::AL), (0x1B73, B::CM), (0x1B7F, B::AL), (0x1B82, B::CM),
    (0x1BA0, B::AL), (0x1BAF, B::CM), (0x1BB9, B::NU), (0x1BE5, B::AL),
    (0x1BF3, B::CM), (0x1C23, B::AL), (0x1C37, B::CM), (0x1C3A, B::AL),
    (0x1C3F, B::BA), (0x1C49, B::NU), (0x1C4F, B::AL), (0x1C59, B::NU),
    (0x1CCF, B::AL), (0x1CE8, B::CM), (0x1CF1, B::AL), (0x1CF9, B::CM),
    (0x1DBF, B::AL), (0x1DFF, B::CM), (0x1FFF, B::AL), (0x2014, B::BA),
    (0x201A, B::AL), (0x201F, B::QU), (0x2023, B::AL), (0x2029, B::IN),
    (0x202F, B::CM), (0x203D, B::PO), (0x2046, B::AL), (0x2049, B::NS),
    (0x2057, B::AL), (0x2060, B::BA), (0x2065, B::AL), (0x206F, B::CM),
    (0x209F, B::AL), (0x20CF, B::PR), (0x20F0, B::CM), (0x23EF, B::AL),
    (0x23F3, B::ID), (0x25FF, B::AL), (0x2603, B::ID), (0x2619, B::AL),
    (0x261F, B::ID), (0x2638, B::AL), (0x263B, B::ID), (0x26BC, B::AL),
    (0x26C8, B::ID), (0x26CE, B::AL), (0x26D4, B::ID), (0x26DE, B::AL),
    (0x26E1, B::ID), (0x26F0, B::AL), (0x2704, B::ID), (0x2709, B::AL),
    (0x270D, B::EB), (0x275A, B::AL), (0x2764, B::QU), (0x2CEE, B::AL),
    (0x2CF1, B::CM), (0x2CF9, B::AL), (0x2CFF, B::BA), (0x2DDF, B::AL),
    (0x2DFF, B::CM), (0x2E0D, B::QU), (0x2E34, B::BA), (0x2E3B, B::AL),
    (0x2E49, B::BA), (0x2E7F, B::AL), (0x2EF3, B::ID), (0x2EFF, B::AL),
    (0x2FD5, B::ID), (0x2FEF, B::AL), (0x2FFB, B::ID), (0x301F, B::AL),
    (0x3029, B::ID), (0x302F, B::CM), (0x309A, B::ID), (0x30A9, B::NS),
    (0x30FA, B::ID), (0x30FF, B::NS), (0x3104, B::AL), (0x31BA, B::ID),
    (0x31BF, B::AL), (0x31E3, B::ID), (0x31EF, B::AL), (0x31FF, B::NS),
    (0x3247, B::ID), (0x324F, B::AL), (0x4DBF, B::ID), (0x4DFF, B::AL),
    (0xA48C, B::ID), (0xA48F, B::AL), (0xA4C6, B::ID), (0xA61F, B::AL),
    (0xA629, B::NU), (0xA66E, B::AL), (0xA67D, B::CM), (0xA6F2, B::AL),
    (0xA6F7, B::BA), (0xA822, B::AL), (0xA827, B::CM), (0xA8B3, B::AL),
    (0xA8C5, B::CM), (0xA8CF, B::AL), (0xA8D9, B::NU), (0xA8DF, B::AL),
    (0xA8F1, B::CM), (0xA8FF, B::AL), (0xA909, B::NU), (0xA925, B::AL),
    (0xA92F, B::CM), (0xA946, B::AL), (0xA953, B::CM), (0xA95F, B::AL),
    (0xA97C, B::JL), (0xA97F, B::AL), (0xA983, B::CM), (0xA9B2, B::AL),
    (0xA9C0, B::CM), (0xA9C6, B::AL), (0xA9C9, B::BA), (0xA9CF, B::AL),
    (0xA9D9, B::NU), (0xA9EF, B::AL), (0xA9F9, B::NU), (0xAA28, B::AL),
    (0xAA36, B::CM), (0xAA4F, B::AL), (0xAA59, B::NU), (0xAA5C, B::AL),
    (0xAA5F, B::BA), (0xAA7A, B::AL), (0xAA7D, B::CM), (0xAAB1, B::AL),
    (0xAAB8, B::CM), (0xAAEA, B::AL), (0xAAF1, B::CM), (0xABE2, B::AL),
    (0xABEF, B::CM), (0xABF9, B::NU), (0xAC00, B::AL), (0xD7A3, B::H3),
    (0xD7AF, B::AL), (0xD7C6, B::JV), (0xD7CA, B::AL), (0xD7FB, B::JT),
    (0xF8FF, B::AL), (0xFAFF, B::ID), (0xFB1E, B::AL), (0xFB4F, B::HL),
    (0xFDFF, B::AL), (0xFE19, B::CM), (0xFE1F, B::AL), (0xFE2F, B::CM),
    (0xFE6B, B::ID), (0xFF0E, B::AL), (0xFF66, B::ID), (0xFF70, B::NS),
    (0xFFBE, B::ID), (0xFFC1, B::AL), (0xFFDC, B::ID), (0xFFE1, B::AL),
    (0xFFE6, B::ID), (0xFFF8, B::AL), (0xFFFC, B::CM), (0x100FF, B::AL),
    (0x10102, B::BA), (0x10375, B::AL), (0x1037A, B::CM), (0x1049F, B::AL),
    (0x104A9, B::NU), (0x10A00, B::AL), (0x10A06, B::CM), (0x10A0B, B::AL),
    (0x10A0F, B::CM), (0x10A37, B::AL), (0x10A3A, B::CM), (0x10A4F, B::AL),
    (0x10A57, B::BA), (0x10AEF, B::AL), (0x10AF6, B::BA), (0x10B38, B::AL),
    (0x10B3F, B::BA), (0x10FFF, B::AL), (0x11002, B::CM), (0x11037, B::AL),
    (0x11048, B::CM), (0x11065, B::AL), (0x1106F, B::NU), (0x1107E, B::AL),
    (0x11082, B::CM), (0x110AF, B::AL), (0x110BA, B::CM), (0x110BD, B::AL),
    (0x110C1, B::BA), (0x110EF, B::AL), (0x110F9, B::NU), (0x110FF, B::AL),
    (0x11102, B::CM), (0x11126, B::AL), (0x11135, B::CM), (0x1113F, B::NU),
    (0x11143, B::BA), (0x1117F, B::AL), (0x11182, B::CM), (0x111B2, B::AL),
    (0x111C0, B::CM), (0x111C9, B::AL), (0x111CC, B::CM), (0x111CF, B::AL),
    (0x111DC, B::NU), (0x111DF, B::BA), (0x1122B, B::AL), (0x1123E, B::CM),
    (0x112DE, B::AL), (0x112EA, B::CM), (0x112EF, B::AL), (0x112F9, B::NU),
    (0x112FF, B::AL), (0x11303, B::CM), (0x1133D, B::AL), (0x1134D, B::CM),
    (0x11365, B::AL), (0x1136C, B::CM), (0x1136F, B::AL), (0x11374, B::CM),
    (0x11434, B::AL), (0x11446, B::CM), (0x1144A, B::AL), (0x1144F, B::BA),
    (0x1145B, B::NU), (0x114AF, B::AL), (0x114C3, B::CM), (0x114CF, B::AL),
    (0x114D9, B::NU), (0x115AE, B::AL), (0x115C5, B::CM), (0x115C8, B::AL),
    (0x115D7, B::BA), (0x1162F, B::AL), (0x11642, B::CM), (0x1164F, B::AL),
    (0x11659, B::NU), (0x1165F, B::AL), (0x1166C, B::BB), (0x116AA, B::AL),
    (0x116B7, B::CM), (0x116BF, B::AL), (0x116C9, B::NU), (0x1171C, B::AL),
    (0x1172B, B::CM), (0x1172F, B::AL), (0x1173B, B::NU), (0x1173E, B::BA),
    (0x118DF, B::AL), (0x118E9, B::NU), (0x11A00, B::AL), (0x11A0A, B::CM),
    (0x11A32, B::AL), (0x11A40, B::CM), (0x11A47, B::BA), (0x11A50, B::AL),
    (0x11A5B, B::CM), (0x11A89, B::AL), (0x11A99, B::CM), (0x11A9D, B::BA),
    (0x11AA2, B::BB), (0x11C2E, B::AL), (0x11C40, B::CM), (0x11C45, B::BA),
    (0x11C4F, B::AL), (0x11C59, B::NU), (0x11C91, B::AL), (0x11CB6, B::CM),
    (0x11D30, B::AL), (0x11D36, B::CM), (0x11D3E, B::AL), (0x11D47, B::CM),
    (0x11D4F, B::AL), (0x11D59, B::NU), (0x1246F, B::AL), (0x12474, B::BA),
    (0x13257, B::AL), (0x1325A, B::OP), (0x1325D, B::CL), (0x16A5F, B::AL),
    (0x16A69, B::NU), (0x16AEF, B::AL), (0x16AF5, B::CM), (0x16B2F, B::AL),
    (0x16B36, B::CM), (0x16B39, B::BA), (0x16B4F, B::AL), (0x16B59, B::NU),
    (0x16F50, B::AL), (0x16F7E, B::CM), (0x16F8E, B::AL), (0x16F92, B::CM),
    (0x16FFF, B::AL), (0x187EC, B::ID), (0x187FF, B::AL), (0x18AF2, B::ID),
    (0x1AFFF, B::AL), (0x1B11E, B::ID), (0x1B16F, B::AL), (0x1B2FB, B::ID),
    (0x1BC9F, B::AL), (0x1BCA3, B::CM), (0x1D164, B::AL), (0x1D169, B::CM),
    (0x1D16C, B::AL), (0x1D18B, B::CM), (0x1D1A9, B::AL), (0x1D1AD, B::CM),
    (0x1D241, B::AL), (0x1D244, B::CM), (0x1D7CD, B::AL), (0x1D7FF, B::NU),
    (0x1D9FF, B::AL), (0x1DA36, B::CM), (0x1DA3A, B::AL), (0x1DA6C, B::CM),
    (0x1DA86, B::AL), (0x1DA8A, B::BA), (0x1DA9A, B::AL), (0x1DAAF, B::CM),
    (0x1DFFF, B::AL), (0x1E02A, B::CM), (0x1E8CF, B::AL), (0x1E8D6, B::CM),
    (0x1E943, B::AL), (0x1E94A, B::CM), (0x1E94F, B::AL), (0x1E959, B::NU),
    (0x1EFFF, B::AL), (0x1F0FF, B::ID), (0x1F10C, B::AL), (0x1F10F, B::ID),
    (0x1F16B, B::AL), (0x1F16F, B::ID), (0x1F1AC, B::AL), (0x1F1E5, B::ID),
    (0x1F1FF, B::RI), (0x1F3C1, B::ID), (0x1F3CC, B::EB), (0x1F3FA, B::ID),
    (0x1F3FF, B::EM), (0x1F445, B::ID), (0x1F450, B::EB), (0x1F465, B::ID),
    (0x1F469, B::EB), (0x1F46F, B::ID), (0x1F478, B::EB), (0x1F480, B::ID),
    (0x1F487, B::EB), (0x1F4FF, B::ID), (0x1F506, B::AL), (0x1F516, B::ID),
    (0x1F524, B::AL), (0x1F531, B::ID), (0x1F549, B::AL), (0x1F5D3, B::ID),
    (0x1F5DB, B::AL), (0x1F5F3, B::ID), (0x1F5F9, B::AL), (0x1F644, B::ID),
    (0x1F647, B::EB), (0x1F64A, B::ID), (0x1F64F, B::EB), (0x1F675, B::AL),
    (0x1F678, B::QU), (0x1F67B, B::NS), (0x1F67F, B::AL), (0x1F6B3, B::ID),
    (0x1F6B6, B::EB), (0x1F6FF, B::ID), (0x1F773, B::AL), (0x1F77F, B::ID),
    (0x1F7D4, B::AL), (0x1F7FF, B::ID), (0x1F80B, B::AL), (0x1F80F, B::ID),
    (0x1F847, B::AL), (0x1F84F, B::ID), (0x1F859, B::AL), (0x1F85F, B::ID),
    (0x1F887, B::AL), (0x1F88F, B::ID), (0x1F8AD, B::AL), (0x1F8FF, B::ID),
    (0x1F90B, B::AL), (0x1F917, B::ID), (0x1F91F, B::EB), (0x1F92F, B::ID),
    (0x1F939, B::EB), (0x1F9D0, B::ID), (0x1F9DD, B::EB), (0x3FFFD, B::ID),
    (0xE001F, B::AL), (0xE007F, B::CM), (0xE00FF, B::AL), (0xE01EF, B::CM),
    (0x10FFFD, B::AL),
];
