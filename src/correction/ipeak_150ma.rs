//! Correction factors for a peak current setting of 150mA

use super::CorrectionTable;

/// Correction factors for an output voltage of 1.8V
pub const VOUT_1_8V: &CorrectionTable = &[
    476, 251, 58, -106, -244, -357, -449, -520, -573, -611, -633, -643, -641, -629, -609, -580,
    -544, -503, -456, -405, -351, -293, -232, -169, -104, -37, 32, 102, 174, 247, 322, 399, 478,
    558, 641, 727, 816, 907,
];

/// Correction factors for an output voltage of 2.5V
pub const VOUT_2_5V: &CorrectionTable = &[
    -306, -464, -596, -704, -793, -862, -915, -953, -978, -991, -994, -988, -973, -951, -922, -888,
    -848, -804, -756, -704, -649, -590, -529, -465, -399, -330, -260, -187, -113, -38, 39, 116, 194,
    272, 350, 427, 502, 575,
];

/// Correction factors for an output voltage of 2.8V
pub const VOUT_2_8V: &CorrectionTable = &[
    -492, -607, -707, -792, -864, -924, -971, -1006, -1031, -1045, -1051, -1047, -1036, -1017, -991,
    -959, -921, -878, -831, -780, -725, -666, -605, -542, -476, -409, -340, -269, -197, -123, -48,
    28, 105, 185, 266, 349, 436, 525,
];

/// Correction factors for an output voltage of 3.0V
pub const VOUT_3_0V: &CorrectionTable = &[
    -625, -720, -803, -875, -935, -985, -1024, -1054, -1074, -1085, -1088, -1083, -1071, -1051,
    -1026, -994, -957, -916, -869, -819, -765, -709, -649, -587, -522, -456, -387, -318, -246, -173,
    -98, -22, 57, 137, 221, 307, 396, 490,
];

/// Correction factors for an output voltage of 3.3V
pub const VOUT_3_3V: &CorrectionTable = &[
    -845, -922, -986, -1038, -1081, -1113, -1136, -1152, -1159, -1159, -1153, -1140, -1122, -1099,
    -1071, -1038, -1001, -960, -916, -868, -817, -763, -707, -647, -585, -520, -453, -384, -312,
    -239, -162, -84, -4, 78, 163, 249, 338, 428,
];

/// Correction factors for an output voltage of 3.6V
pub const VOUT_3_6V: &CorrectionTable = &[
    -1068, -1133, -1183, -1219, -1244, -1258, -1264, -1263, -1255, -1242, -1224, -1201, -1175,
    -1146, -1114, -1079, -1041, -1001, -957, -912, -863, -812, -758, -701, -641, -578, -511, -442,
    -370, -295, -217, -137, -55, 28, 111, 194, 275, 355,
];

/// Correction factors for an output voltage of 4.5V
pub const VOUT_4_5V: &CorrectionTable = &[
    -1501, -1502, -1501, -1498, -1492, -1483, -1472, -1458, -1440, -1420, -1397, -1370, -1340,
    -1307, -1271, -1232, -1190, -1146, -1098, -1048, -995, -940, -883, -823, -762, -698, -633, -566,
    -498, -428, -357, -284, -210, -136, -60, 18, 96, 175,
];

/// Correction factors for an output voltage of 5.0V
pub const VOUT_5_0V: &CorrectionTable = &[
    -1790, -1791, -1784, -1769, -1747, -1720, -1688, -1653, -1615, -1574, -1531, -1487, -1441,
    -1395, -1349, -1301, -1254, -1205, -1157, -1107, -1057, -1007, -955, -901, -846, -790, -731,
    -670, -605, -538, -468, -394, -316, -234, -148, -57, 38, 138,
];
