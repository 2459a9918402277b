//! Correction factors for a peak current setting of 100mA

use super::CorrectionTable;

/// Correction factors for an output voltage of 1.8V
pub const VOUT_1_8V: &CorrectionTable = &[
    549, 287, 77, -88, -212, -302, -363, -399, -414, -411, -393, -362, -322, -274, -218, -157, -92,
    -23, 50, 125, 204, 285, 369, 455, 545, 638, 735, 834, 937, 1044, 1153, 1266, 1380, 1496, 1612,
    1727, 1839, 1948,
];

/// Correction factors for an output voltage of 2.5V
pub const VOUT_2_5V: &CorrectionTable = &[
    -470, -604, -705, -778, -827, -855, -864, -858, -839, -809, -770, -724, -671, -613, -550, -484,
    -415, -344, -270, -194, -116, -35, 47, 132, 220, 311, 405, 502, 602, 706, 813, 923, 1037, 1153,
    1271, 1391, 1512, 1632,
];

/// Correction factors for an output voltage of 2.8V
pub const VOUT_2_8V: &CorrectionTable = &[
    -763, -831, -882, -917, -938, -946, -944, -932, -911, -882, -846, -804, -756, -703, -645, -584,
    -518, -449, -376, -300, -221, -139, -53, 35, 126, 219, 316, 415, 517, 621, 727, 836, 946, 1057,
    1170, 1282, 1395, 1507,
];

/// Correction factors for an output voltage of 3.0V
pub const VOUT_3_0V: &CorrectionTable = &[
    -935, -970, -995, -1010, -1016, -1013, -1003, -985, -960, -929, -893, -851, -803, -752, -695,
    -634, -570, -501, -429, -353, -274, -192, -106, -18, 73, 167, 264, 363, 464, 567, 672, 779, 887,
    997, 1107, 1218, 1329, 1439,
];

/// Correction factors for an output voltage of 3.3V
pub const VOUT_3_3V: &CorrectionTable = &[
    -1163, -1170, -1171, -1165, -1152, -1134, -1111, -1082, -1048, -1010, -967, -920, -869, -814,
    -756, -693, -628, -559, -487, -412, -334, -253, -169, -83, 6, 98, 192, 288, 387, 487, 590, 695,
    802, 910, 1020, 1132, 1244, 1358,
];

/// Correction factors for an output voltage of 3.6V
pub const VOUT_3_6V: &CorrectionTable = &[
    -1362, -1359, -1348, -1330, -1305, -1274, -1238, -1197, -1151, -1102, -1049, -993, -934, -873,
    -809, -742, -674, -603, -531, -456, -379, -300, -219, -136, -51, 36, 126, 219, 314, 412, 512,
    615, 721, 830, 943, 1058, 1176, 1297,
];

/// Correction factors for an output voltage of 4.5V
pub const VOUT_4_5V: &CorrectionTable = &[
    -1905, -1859, -1809, -1753, -1695, -1633, -1569, -1503, -1436, -1367, -1297, -1226, -1155,
    -1083, -1010, -937, -863, -787, -711, -634, -555, -474, -392, -308, -222, -133, -42, 51, 147,
    245, 346, 449, 555, 662, 771, 882, 994, 1106,
];

/// Correction factors for an output voltage of 5.0V
pub const VOUT_5_0V: &CorrectionTable = &[
    -2470, -2317, -2180, -2057, -1946, -1845, -1752, -1665, -1584, -1507, -1433, -1361, -1290,
    -1220, -1149, -1077, -1004, -930, -853, -775, -694, -612, -526, -439, -349, -258, -164, -69, 28,
    126, 225, 326, 427, 529, 631, 734, 837, 941,
];
