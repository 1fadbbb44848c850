use super::metadata::ECBlockInfo;

// Error correction block layout per (ec level, version)
//------------------------------------------------------------------------------

pub static EC_BLOCK_INFOS: [[ECBlockInfo; 40]; 4] = [
    // L
    [
        ECBlockInfo::new(1, 19, 0, 0, 7),
        ECBlockInfo::new(1, 34, 0, 0, 10),
        ECBlockInfo::new(1, 55, 0, 0, 15),
        ECBlockInfo::new(1, 80, 0, 0, 20),
        ECBlockInfo::new(1, 108, 0, 0, 26),
        ECBlockInfo::new(2, 68, 0, 0, 18),
        ECBlockInfo::new(2, 78, 0, 0, 20),
        ECBlockInfo::new(2, 97, 0, 0, 24),
        ECBlockInfo::new(2, 116, 0, 0, 30),
        ECBlockInfo::new(2, 68, 2, 69, 18),
        ECBlockInfo::new(4, 81, 0, 0, 20),
        ECBlockInfo::new(2, 92, 2, 93, 24),
        ECBlockInfo::new(4, 107, 0, 0, 26),
        ECBlockInfo::new(3, 115, 1, 116, 30),
        ECBlockInfo::new(5, 87, 1, 88, 22),
        ECBlockInfo::new(5, 98, 1, 99, 24),
        ECBlockInfo::new(1, 107, 5, 108, 28),
        ECBlockInfo::new(5, 120, 1, 121, 30),
        ECBlockInfo::new(3, 113, 4, 114, 28),
        ECBlockInfo::new(3, 107, 5, 108, 28),
        ECBlockInfo::new(4, 116, 4, 117, 28),
        ECBlockInfo::new(2, 111, 7, 112, 28),
        ECBlockInfo::new(4, 121, 5, 122, 30),
        ECBlockInfo::new(6, 117, 4, 118, 30),
        ECBlockInfo::new(8, 106, 4, 107, 26),
        ECBlockInfo::new(10, 114, 2, 115, 28),
        ECBlockInfo::new(8, 122, 4, 123, 30),
        ECBlockInfo::new(3, 117, 10, 118, 30),
        ECBlockInfo::new(7, 116, 7, 117, 30),
        ECBlockInfo::new(5, 115, 10, 116, 30),
        ECBlockInfo::new(13, 115, 3, 116, 30),
        ECBlockInfo::new(17, 115, 0, 0, 30),
        ECBlockInfo::new(17, 115, 1, 116, 30),
        ECBlockInfo::new(13, 115, 6, 116, 30),
        ECBlockInfo::new(12, 121, 7, 122, 30),
        ECBlockInfo::new(6, 121, 14, 122, 30),
        ECBlockInfo::new(17, 122, 4, 123, 30),
        ECBlockInfo::new(4, 122, 18, 123, 30),
        ECBlockInfo::new(20, 117, 4, 118, 30),
        ECBlockInfo::new(19, 118, 6, 119, 30),
    ],
    // M
    [
        ECBlockInfo::new(1, 16, 0, 0, 10),
        ECBlockInfo::new(1, 28, 0, 0, 16),
        ECBlockInfo::new(1, 44, 0, 0, 26),
        ECBlockInfo::new(2, 32, 0, 0, 18),
        ECBlockInfo::new(2, 43, 0, 0, 24),
        ECBlockInfo::new(4, 27, 0, 0, 16),
        ECBlockInfo::new(4, 31, 0, 0, 18),
        ECBlockInfo::new(2, 38, 2, 39, 22),
        ECBlockInfo::new(3, 36, 2, 37, 22),
        ECBlockInfo::new(4, 43, 1, 44, 26),
        ECBlockInfo::new(1, 50, 4, 51, 30),
        ECBlockInfo::new(6, 36, 2, 37, 22),
        ECBlockInfo::new(8, 37, 1, 38, 22),
        ECBlockInfo::new(4, 40, 5, 41, 24),
        ECBlockInfo::new(5, 41, 5, 42, 24),
        ECBlockInfo::new(7, 45, 3, 46, 28),
        ECBlockInfo::new(10, 46, 1, 47, 28),
        ECBlockInfo::new(9, 43, 4, 44, 26),
        ECBlockInfo::new(3, 44, 11, 45, 26),
        ECBlockInfo::new(3, 41, 13, 42, 26),
        ECBlockInfo::new(17, 42, 0, 0, 26),
        ECBlockInfo::new(17, 46, 0, 0, 28),
        ECBlockInfo::new(4, 47, 14, 48, 28),
        ECBlockInfo::new(6, 45, 14, 46, 28),
        ECBlockInfo::new(8, 47, 13, 48, 28),
        ECBlockInfo::new(19, 46, 4, 47, 28),
        ECBlockInfo::new(22, 45, 3, 46, 28),
        ECBlockInfo::new(3, 45, 23, 46, 28),
        ECBlockInfo::new(21, 45, 7, 46, 28),
        ECBlockInfo::new(19, 47, 10, 48, 28),
        ECBlockInfo::new(2, 46, 29, 47, 28),
        ECBlockInfo::new(10, 46, 23, 47, 28),
        ECBlockInfo::new(14, 46, 21, 47, 28),
        ECBlockInfo::new(14, 46, 23, 47, 28),
        ECBlockInfo::new(12, 47, 26, 48, 28),
        ECBlockInfo::new(6, 47, 34, 48, 28),
        ECBlockInfo::new(29, 46, 14, 47, 28),
        ECBlockInfo::new(13, 46, 32, 47, 28),
        ECBlockInfo::new(40, 47, 7, 48, 28),
        ECBlockInfo::new(18, 47, 31, 48, 28),
    ],
    // Q
    [
        ECBlockInfo::new(1, 13, 0, 0, 13),
        ECBlockInfo::new(1, 22, 0, 0, 22),
        ECBlockInfo::new(2, 17, 0, 0, 18),
        ECBlockInfo::new(2, 24, 0, 0, 26),
        ECBlockInfo::new(2, 15, 2, 16, 18),
        ECBlockInfo::new(4, 19, 0, 0, 24),
        ECBlockInfo::new(2, 14, 4, 15, 18),
        ECBlockInfo::new(4, 18, 2, 19, 22),
        ECBlockInfo::new(4, 16, 4, 17, 20),
        ECBlockInfo::new(6, 19, 2, 20, 24),
        ECBlockInfo::new(4, 22, 4, 23, 28),
        ECBlockInfo::new(4, 20, 6, 21, 26),
        ECBlockInfo::new(8, 20, 4, 21, 24),
        ECBlockInfo::new(11, 16, 5, 17, 20),
        ECBlockInfo::new(5, 24, 7, 25, 30),
        ECBlockInfo::new(15, 19, 2, 20, 24),
        ECBlockInfo::new(1, 22, 15, 23, 28),
        ECBlockInfo::new(17, 22, 1, 23, 28),
        ECBlockInfo::new(17, 21, 4, 22, 26),
        ECBlockInfo::new(15, 24, 5, 25, 30),
        ECBlockInfo::new(17, 22, 6, 23, 28),
        ECBlockInfo::new(7, 24, 16, 25, 30),
        ECBlockInfo::new(11, 24, 14, 25, 30),
        ECBlockInfo::new(11, 24, 16, 25, 30),
        ECBlockInfo::new(7, 24, 22, 25, 30),
        ECBlockInfo::new(28, 22, 6, 23, 28),
        ECBlockInfo::new(8, 23, 26, 24, 30),
        ECBlockInfo::new(4, 24, 31, 25, 30),
        ECBlockInfo::new(1, 23, 37, 24, 30),
        ECBlockInfo::new(15, 24, 25, 25, 30),
        ECBlockInfo::new(42, 24, 1, 25, 30),
        ECBlockInfo::new(10, 24, 35, 25, 30),
        ECBlockInfo::new(29, 24, 19, 25, 30),
        ECBlockInfo::new(44, 24, 7, 25, 30),
        ECBlockInfo::new(39, 24, 14, 25, 30),
        ECBlockInfo::new(46, 24, 10, 25, 30),
        ECBlockInfo::new(49, 24, 10, 25, 30),
        ECBlockInfo::new(48, 24, 14, 25, 30),
        ECBlockInfo::new(43, 24, 22, 25, 30),
        ECBlockInfo::new(34, 24, 34, 25, 30),
    ],
    // H
    [
        ECBlockInfo::new(1, 9, 0, 0, 17),
        ECBlockInfo::new(1, 16, 0, 0, 28),
        ECBlockInfo::new(2, 13, 0, 0, 22),
        ECBlockInfo::new(4, 9, 0, 0, 16),
        ECBlockInfo::new(2, 11, 2, 12, 22),
        ECBlockInfo::new(4, 15, 0, 0, 28),
        ECBlockInfo::new(4, 13, 1, 14, 26),
        ECBlockInfo::new(4, 14, 2, 15, 26),
        ECBlockInfo::new(4, 12, 4, 13, 24),
        ECBlockInfo::new(6, 15, 2, 16, 28),
        ECBlockInfo::new(3, 12, 8, 13, 24),
        ECBlockInfo::new(7, 14, 4, 15, 28),
        ECBlockInfo::new(12, 11, 4, 12, 22),
        ECBlockInfo::new(11, 12, 5, 13, 24),
        ECBlockInfo::new(11, 12, 7, 13, 24),
        ECBlockInfo::new(3, 15, 13, 16, 30),
        ECBlockInfo::new(2, 14, 17, 15, 28),
        ECBlockInfo::new(2, 14, 19, 15, 28),
        ECBlockInfo::new(9, 13, 16, 14, 26),
        ECBlockInfo::new(15, 15, 10, 16, 28),
        ECBlockInfo::new(19, 16, 6, 17, 30),
        ECBlockInfo::new(34, 13, 0, 0, 24),
        ECBlockInfo::new(16, 15, 14, 16, 30),
        ECBlockInfo::new(30, 16, 2, 17, 30),
        ECBlockInfo::new(22, 15, 13, 16, 30),
        ECBlockInfo::new(33, 16, 4, 17, 30),
        ECBlockInfo::new(12, 15, 28, 16, 30),
        ECBlockInfo::new(11, 15, 31, 16, 30),
        ECBlockInfo::new(19, 15, 26, 16, 30),
        ECBlockInfo::new(23, 15, 25, 16, 30),
        ECBlockInfo::new(23, 15, 28, 16, 30),
        ECBlockInfo::new(19, 15, 35, 16, 30),
        ECBlockInfo::new(11, 15, 46, 16, 30),
        ECBlockInfo::new(59, 16, 1, 17, 30),
        ECBlockInfo::new(22, 15, 41, 16, 30),
        ECBlockInfo::new(2, 15, 64, 16, 30),
        ECBlockInfo::new(24, 15, 46, 16, 30),
        ECBlockInfo::new(42, 15, 32, 16, 30),
        ECBlockInfo::new(10, 15, 67, 16, 30),
        ECBlockInfo::new(20, 15, 61, 16, 30),
    ],
];

// Published data codeword count per (ec level, version)
//------------------------------------------------------------------------------

pub static DATA_CODEWORDS: [[usize; 40]; 4] = [
    [
        19, 34, 55, 80, 108, 136, 156, 194, 232, 274,
        324, 370, 428, 461, 523, 589, 647, 721, 795, 861,
        932, 1006, 1094, 1174, 1276, 1370, 1468, 1531, 1631, 1735,
        1843, 1955, 2071, 2191, 2306, 2434, 2566, 2702, 2812, 2956,
    ],
    [
        16, 28, 44, 64, 86, 108, 124, 154, 182, 216,
        254, 290, 334, 365, 415, 453, 507, 563, 627, 669,
        714, 782, 860, 914, 1000, 1062, 1128, 1193, 1267, 1373,
        1455, 1541, 1631, 1725, 1812, 1914, 1992, 2102, 2216, 2334,
    ],
    [
        13, 22, 34, 48, 62, 76, 88, 110, 132, 154,
        180, 206, 244, 261, 295, 325, 367, 397, 445, 485,
        512, 568, 614, 664, 718, 754, 808, 871, 911, 985,
        1033, 1115, 1171, 1231, 1286, 1354, 1426, 1502, 1582, 1666,
    ],
    [
        9, 16, 26, 36, 46, 60, 66, 86, 100, 122,
        140, 158, 180, 197, 223, 253, 283, 313, 341, 385,
        406, 442, 464, 514, 538, 596, 628, 661, 701, 745,
        793, 845, 901, 961, 986, 1054, 1096, 1142, 1222, 1276,
    ],
];

// Character capacity per (mode, ec level, version)
//------------------------------------------------------------------------------

pub static CHAR_CAPACITIES: [[[usize; 40]; 4]; 4] = [
    // Numeric
    [
        [
            41, 77, 127, 187, 255, 322, 370, 461, 552, 652,
            772, 883, 1022, 1101, 1250, 1408, 1548, 1725, 1903, 2061,
            2232, 2409, 2620, 2812, 3057, 3283, 3517, 3669, 3909, 4158,
            4417, 4686, 4965, 5253, 5529, 5836, 6153, 6479, 6743, 7089,
        ],
        [
            34, 63, 101, 149, 202, 255, 293, 365, 432, 513,
            604, 691, 796, 871, 991, 1082, 1212, 1346, 1500, 1600,
            1708, 1872, 2059, 2188, 2395, 2544, 2701, 2857, 3035, 3289,
            3486, 3693, 3909, 4134, 4343, 4588, 4775, 5039, 5313, 5596,
        ],
        [
            27, 48, 77, 111, 144, 178, 207, 259, 312, 364,
            427, 489, 580, 621, 703, 775, 876, 948, 1063, 1159,
            1224, 1358, 1468, 1588, 1718, 1804, 1933, 2085, 2181, 2358,
            2473, 2670, 2805, 2949, 3081, 3244, 3417, 3599, 3791, 3993,
        ],
        [
            17, 34, 58, 82, 106, 139, 154, 202, 235, 288,
            331, 374, 427, 468, 530, 602, 674, 746, 813, 919,
            969, 1056, 1108, 1228, 1286, 1425, 1501, 1581, 1677, 1782,
            1897, 2022, 2157, 2301, 2361, 2524, 2625, 2735, 2927, 3057,
        ],
    ],
    // Alphanumeric
    [
        [
            25, 47, 77, 114, 154, 195, 224, 279, 335, 395,
            468, 535, 619, 667, 758, 854, 938, 1046, 1153, 1249,
            1352, 1460, 1588, 1704, 1853, 1990, 2132, 2223, 2369, 2520,
            2677, 2840, 3009, 3183, 3351, 3537, 3729, 3927, 4087, 4296,
        ],
        [
            20, 38, 61, 90, 122, 154, 178, 221, 262, 311,
            366, 419, 483, 528, 600, 656, 734, 816, 909, 970,
            1035, 1134, 1248, 1326, 1451, 1542, 1637, 1732, 1839, 1994,
            2113, 2238, 2369, 2506, 2632, 2780, 2894, 3054, 3220, 3391,
        ],
        [
            16, 29, 47, 67, 87, 108, 125, 157, 189, 221,
            259, 296, 352, 376, 426, 470, 531, 574, 644, 702,
            742, 823, 890, 963, 1041, 1094, 1172, 1263, 1322, 1429,
            1499, 1618, 1700, 1787, 1867, 1966, 2071, 2181, 2298, 2420,
        ],
        [
            10, 20, 35, 50, 64, 84, 93, 122, 143, 174,
            200, 227, 259, 283, 321, 365, 408, 452, 493, 557,
            587, 640, 672, 744, 779, 864, 910, 958, 1016, 1080,
            1150, 1226, 1307, 1394, 1431, 1530, 1591, 1658, 1774, 1852,
        ],
    ],
    // Byte
    [
        [
            17, 32, 53, 78, 106, 134, 154, 192, 230, 271,
            321, 367, 425, 458, 520, 586, 644, 718, 792, 858,
            929, 1003, 1091, 1171, 1273, 1367, 1465, 1528, 1628, 1732,
            1840, 1952, 2068, 2188, 2303, 2431, 2563, 2699, 2809, 2953,
        ],
        [
            14, 26, 42, 62, 84, 106, 122, 152, 180, 213,
            251, 287, 331, 362, 412, 450, 504, 560, 624, 666,
            711, 779, 857, 911, 997, 1059, 1125, 1190, 1264, 1370,
            1452, 1538, 1628, 1722, 1809, 1911, 1989, 2099, 2213, 2331,
        ],
        [
            11, 20, 32, 46, 60, 74, 86, 108, 130, 151,
            177, 203, 241, 258, 292, 322, 364, 394, 442, 482,
            509, 565, 611, 661, 715, 751, 805, 868, 908, 982,
            1030, 1112, 1168, 1228, 1283, 1351, 1423, 1499, 1579, 1663,
        ],
        [
            7, 14, 24, 34, 44, 58, 64, 84, 98, 119,
            137, 155, 177, 194, 220, 250, 280, 310, 338, 382,
            403, 439, 461, 511, 535, 593, 625, 658, 698, 742,
            790, 842, 898, 958, 983, 1051, 1093, 1139, 1219, 1273,
        ],
    ],
    // Kanji
    [
        [
            10, 20, 32, 48, 65, 82, 95, 118, 141, 167,
            198, 226, 262, 282, 320, 361, 397, 442, 488, 528,
            572, 618, 672, 721, 784, 842, 902, 940, 1002, 1066,
            1132, 1201, 1273, 1347, 1417, 1496, 1577, 1661, 1729, 1817,
        ],
        [
            8, 16, 26, 38, 52, 65, 75, 93, 111, 131,
            155, 177, 204, 223, 254, 277, 310, 345, 384, 410,
            438, 480, 528, 561, 614, 652, 692, 732, 778, 843,
            894, 947, 1002, 1060, 1113, 1176, 1224, 1292, 1362, 1435,
        ],
        [
            7, 12, 20, 28, 37, 45, 53, 66, 80, 93,
            109, 125, 149, 159, 180, 198, 224, 243, 272, 297,
            314, 348, 376, 407, 440, 462, 496, 534, 559, 604,
            634, 684, 719, 756, 790, 832, 876, 923, 972, 1024,
        ],
        [
            4, 8, 15, 21, 27, 36, 39, 52, 60, 74,
            85, 96, 109, 120, 136, 154, 173, 191, 208, 235,
            248, 270, 284, 315, 330, 365, 385, 405, 430, 457,
            486, 518, 553, 590, 605, 647, 673, 701, 750, 784,
        ],
    ],
];

// Structural tables per version
//------------------------------------------------------------------------------

pub static ALIGNMENT_PATTERN_LOCATIONS: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

pub static VERSION_INFOS: [u32; 40] = [
    0x00000, 0x00000, 0x00000, 0x00000, 0x00000,
    0x00000, 0x07C94, 0x085BC, 0x09A99, 0x0A4D3,
    0x0BBF6, 0x0C762, 0x0D847, 0x0E60D, 0x0F928,
    0x10B78, 0x1145D, 0x12A17, 0x13532, 0x149A6,
    0x15683, 0x168C9, 0x177EC, 0x18EC4, 0x191E1,
    0x1AFAB, 0x1B08E, 0x1CC1A, 0x1D33F, 0x1ED75,
    0x1F250, 0x209D5, 0x216F0, 0x228BA, 0x2379F,
    0x24B0B, 0x2542E, 0x26A64, 0x27541, 0x28C69,
];

pub static REMAINDER_BITS: [usize; 40] = [
    0, 7, 7, 7, 7, 7, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 3, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 4, 3, 3, 3,
    3, 3, 3, 3, 0, 0, 0, 0, 0, 0,
];

pub static TOTAL_CODEWORDS: [usize; 40] = [
    26, 44, 70, 100, 134, 172, 196, 242, 292, 346,
    404, 466, 532, 581, 655, 733, 815, 901, 991, 1085,
    1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185,
    2323, 2465, 2611, 2761, 2876, 3034, 3196, 3362, 3532, 3706,
];

// Format info per (ec level, mask), BCH protected and masked with 0x5412
//------------------------------------------------------------------------------

pub static FORMAT_INFOS: [[u16; 8]; 4] = [
    // L
    [0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976],
    // M
    [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0],
    // Q
    [0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED],
    // H
    [0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B],
];
