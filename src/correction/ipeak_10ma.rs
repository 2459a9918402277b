//! Correction factors for a peak current setting of 10mA

use super::CorrectionTable;

/// Correction factors for an output voltage of 1.8V
pub const VOUT_1_8V: &CorrectionTable = &[
    4951, 5152, 5354, 5559, 5766, 5977, 6191, 6410, 6633, 6860, 7092, 7328, 7569, 7815, 8065, 8320,
    8580, 8844, 9112, 9384, 9661, 9941, 10225, 10512, 10803, 11097, 11394, 11694, 11997, 12302,
    12610, 12921, 13234, 13550, 13869, 14191, 14516, 14844,
];

/// Correction factors for an output voltage of 2.5V
pub const VOUT_2_5V: &CorrectionTable = &[
    4225, 4386, 4552, 4722, 4897, 5077, 5262, 5451, 5645, 5843, 6046, 6253, 6464, 6679, 6898, 7121,
    7348, 7578, 7812, 8050, 8291, 8535, 8783, 9034, 9288, 9547, 9809, 10074, 10344, 10618, 10897,
    11180, 11469, 11763, 12064, 12371, 12686, 13008,
];

/// Correction factors for an output voltage of 2.8V
pub const VOUT_2_8V: &CorrectionTable = &[
    3832, 4025, 4213, 4398, 4580, 4762, 4944, 5127, 5312, 5500, 5691, 5885, 6083, 6285, 6491, 6702,
    6917, 7136, 7360, 7588, 7820, 8056, 8295, 8539, 8786, 9037, 9291, 9549, 9810, 10075, 10344,
    10617, 10895, 11177, 11466, 11761, 12063, 12373,
];

/// Correction factors for an output voltage of 3.0V
pub const VOUT_3_0V: &CorrectionTable = &[
    3603, 3812, 4011, 4203, 4389, 4572, 4752, 4932, 5112, 5294, 5478, 5666, 5857, 6052, 6252, 6456,
    6664, 6878, 7095, 7318, 7545, 7775, 8010, 8249, 8491, 8737, 8986, 9239, 9495, 9754, 10017,
    10284, 10556, 10832, 11114, 11403, 11699, 12004,
];

/// Correction factors for an output voltage of 3.3V
pub const VOUT_3_3V: &CorrectionTable = &[
    3312, 3533, 3741, 3937, 4126, 4308, 4486, 4662, 4837, 5013, 5191, 5371, 5555, 5742, 5934, 6131,
    6332, 6538, 6748, 6964, 7183, 7407, 7634, 7866, 8101, 8339, 8581, 8826, 9074, 9325, 9580, 9839,
    10103, 10372, 10646, 10928, 11219, 11519,
];

/// Correction factors for an output voltage of 3.6V
pub const VOUT_3_6V: &CorrectionTable = &[
    3058, 3283, 3493, 3690, 3879, 4060, 4237, 4411, 4584, 4757, 4932, 5109, 5288, 5471, 5658, 5850,
    6046, 6246, 6450, 6659, 6872, 7089, 7310, 7534, 7762, 7993, 8227, 8464, 8705, 8949, 9197, 9449,
    9706, 9969, 10238, 10516, 10802, 11100,
];

/// Correction factors for an output voltage of 4.5V
pub const VOUT_4_5V: &CorrectionTable = &[
    2148, 2424, 2678, 2913, 3132, 3338, 3534, 3723, 3905, 4084, 4261, 4438, 4614, 4792, 4972, 5154,
    5340, 5529, 5722, 5918, 6118, 6321, 6529, 6739, 6953, 7171, 7391, 7614, 7841, 8071, 8304, 8540,
    8781, 9026, 9276, 9532, 9796, 10068,
];

/// Correction factors for an output voltage of 5.0V
pub const VOUT_5_0V: &CorrectionTable = &[
    1588, 1914, 2209, 2478, 2725, 2953, 3167, 3369, 3562, 3748, 3930, 4109, 4287, 4465, 4644, 4825,
    5008, 5195, 5385, 5578, 5775, 5975, 6179, 6386, 6597, 6811, 7028, 7248, 7472, 7698, 7928, 8162,
    8400, 8642, 8891, 9146, 9410, 9683,
];
