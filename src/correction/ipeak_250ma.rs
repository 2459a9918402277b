//! Correction factors for a peak current setting of 250mA

use super::CorrectionTable;

/// Correction factors for an output voltage of 1.8V
pub const VOUT_1_8V: &CorrectionTable = &[
    1007, 754, 530, 332, 159, 10, -117, -224, -311, -381, -434, -473, -498, -511, -513, -505, -489,
    -466, -435, -400, -360, -316, -269, -219, -168, -115, -61, -6, 50, 107, 165, 224, 285, 348, 414,
    484, 559, 639,
];

/// Correction factors for an output voltage of 2.5V
pub const VOUT_2_5V: &CorrectionTable = &[
    308, 39, -184, -366, -514, -632, -724, -793, -844, -880, -901, -912, -914, -908, -897, -879,
    -858, -833, -804, -773, -739, -702, -662, -619, -574, -525, -473, -419, -361, -300, -236, -169,
    -101, -32, 37, 105, 171, 233,
];

/// Correction factors for an output voltage of 2.8V
pub const VOUT_2_8V: &CorrectionTable = &[
    90, -128, -314, -473, -607, -717, -807, -879, -933, -974, -1001, -1017, -1023, -1020, -1010,
    -993, -971, -943, -912, -877, -840, -800, -757, -712, -666, -618, -567, -515, -461, -404, -345,
    -283, -218, -149, -77, 1, 83, 171,
];

/// Correction factors for an output voltage of 3.0V
pub const VOUT_3_0V: &CorrectionTable = &[
    -64, -247, -408, -548, -668, -769, -853, -922, -975, -1016, -1044, -1062, -1069, -1068, -1059,
    -1043, -1021, -994, -963, -928, -889, -848, -805, -760, -714, -665, -615, -564, -511, -456,
    -398, -337, -273, -203, -129, -48, 41, 139,
];

/// Correction factors for an output voltage of 3.3V
pub const VOUT_3_3V: &CorrectionTable = &[
    -301, -443, -570, -681, -778, -860, -930, -987, -1032, -1067, -1091, -1106, -1113, -1112, -1104,
    -1089, -1069, -1044, -1014, -981, -944, -905, -863, -818, -772, -724, -673, -621, -567, -511,
    -452, -390, -324, -254, -179, -97, -7, 91,
];

/// Correction factors for an output voltage of 3.6V
pub const VOUT_3_6V: &CorrectionTable = &[
    -518, -637, -742, -831, -907, -971, -1023, -1065, -1098, -1122, -1138, -1146, -1148, -1144,
    -1135, -1121, -1102, -1078, -1051, -1021, -986, -949, -909, -866, -820, -771, -720, -666, -610,
    -550, -488, -423, -354, -283, -208, -130, -48, 38,
];

/// Correction factors for an output voltage of 4.5V
pub const VOUT_4_5V: &CorrectionTable = &[
    -874, -988, -1082, -1160, -1223, -1272, -1309, -1336, -1352, -1361, -1361, -1355, -1343, -1326,
    -1305, -1279, -1251, -1219, -1184, -1146, -1107, -1065, -1021, -976, -928, -879, -827, -774,
    -718, -660, -600, -537, -472, -405, -334, -261, -185, -106,
];

/// Correction factors for an output voltage of 5.0V
pub const VOUT_5_0V: &CorrectionTable = &[
    -1252, -1277, -1299, -1319, -1335, -1349, -1358, -1364, -1366, -1365, -1359, -1350, -1337,
    -1321, -1302, -1279, -1254, -1227, -1197, -1165, -1131, -1095, -1058, -1019, -978, -936, -892,
    -846, -798, -747, -693, -636, -574, -507, -434, -354, -265, -167,
];
