//! Correction factors for a peak current setting of 15mA

use super::CorrectionTable;

/// Correction factors for an output voltage of 1.8V
pub const VOUT_1_8V: &CorrectionTable = &[
    3046, 3189, 3325, 3457, 3587, 3717, 3850, 3986, 4126, 4272, 4425, 4583, 4749, 4921, 5100, 5286,
    5478, 5675, 5878, 6086, 6298, 6514, 6734, 6956, 7182, 7410, 7640, 7873, 8109, 8349, 8592, 8841,
    9095, 9358, 9630, 9914, 10211, 10526,
];

/// Correction factors for an output voltage of 2.5V
pub const VOUT_2_5V: &CorrectionTable = &[
    2510, 2635, 2754, 2869, 2981, 3093, 3207, 3323, 3442, 3567, 3696, 3832, 3973, 4120, 4274, 4434,
    4599, 4770, 4946, 5127, 5312, 5502, 5695, 5891, 6091, 6294, 6499, 6707, 6918, 7133, 7352, 7575,
    7804, 8039, 8283, 8536, 8802, 9082,
];

/// Correction factors for an output voltage of 2.8V
pub const VOUT_2_8V: &CorrectionTable = &[
    2346, 2455, 2561, 2666, 2772, 2879, 2988, 3100, 3216, 3337, 3462, 3592, 3728, 3869, 4015, 4167,
    4323, 4484, 4651, 4821, 4996, 5174, 5357, 5543, 5732, 5925, 6121, 6321, 6524, 6731, 6942, 7158,
    7380, 7608, 7843, 8087, 8340, 8606,
];

/// Correction factors for an output voltage of 3.0V
pub const VOUT_3_0V: &CorrectionTable = &[
    2187, 2304, 2416, 2525, 2632, 2740, 2849, 2960, 3074, 3192, 3315, 3441, 3573, 3710, 3851, 3998,
    4150, 4306, 4467, 4632, 4802, 4976, 5153, 5334, 5518, 5706, 5897, 6091, 6289, 6491, 6698, 6909,
    7126, 7349, 7579, 7819, 8068, 8330,
];

/// Correction factors for an output voltage of 3.3V
pub const VOUT_3_3V: &CorrectionTable = &[
    1888, 2037, 2173, 2299, 2418, 2533, 2645, 2756, 2869, 2983, 3101, 3222, 3348, 3479, 3615, 3756,
    3902, 4053, 4208, 4369, 4533, 4702, 4874, 5049, 5228, 5409, 5594, 5782, 5973, 6167, 6366, 6570,
    6779, 6996, 7221, 7457, 7705, 7968,
];

/// Correction factors for an output voltage of 3.6V
pub const VOUT_3_6V: &CorrectionTable = &[
    1567, 1753, 1918, 2065, 2199, 2323, 2441, 2555, 2668, 2780, 2895, 3013, 3135, 3262, 3394, 3531,
    3673, 3821, 3973, 4130, 4291, 4456, 4625, 4796, 4970, 5147, 5326, 5508, 5693, 5881, 6072, 6269,
    6472, 6684, 6905, 7139, 7388, 7655,
];

/// Correction factors for an output voltage of 4.5V
pub const VOUT_4_5V: &CorrectionTable = &[
    904, 1094, 1267, 1426, 1576, 1717, 1852, 1983, 2112, 2239, 2366, 2493, 2622, 2752, 2885, 3021,
    3159, 3300, 3444, 3590, 3740, 3892, 4046, 4204, 4363, 4526, 4692, 4860, 5032, 5208, 5389, 5576,
    5770, 5971, 6182, 6404, 6640, 6892,
];

/// Correction factors for an output voltage of 5.0V
pub const VOUT_5_0V: &CorrectionTable = &[
    245, 579, 861, 1099, 1302, 1477, 1631, 1769, 1896, 2017, 2133, 2249, 2367, 2487, 2611, 2740,
    2874, 3013, 3157, 3306, 3459, 3615, 3774, 3935, 4097, 4261, 4425, 4590, 4757, 4924, 5095, 5270,
    5451, 5641, 5844, 6062, 6301, 6565,
];
