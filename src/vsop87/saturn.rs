#![allow(clippy::excessive_precision)]
//! VSOP87D series for Saturn
//!
//! Heliocentric coordinates referred to the mean dynamical ecliptic and equinox of date.
//! Abridged series, 561 terms. Amplitudes are in units of 1e-8 rad (L, B) and 1e-8 AU (R).

use super::{PlanetSeries, Term};

pub const SATURN: PlanetSeries = PlanetSeries {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4, B5],
    radius: &[R0, R1, R2, R3, R4, R5],
};

const L0: &[Term] = &[
    Term { a: 87401354.0, b: 0.0, c: 0.0 },
    Term { a: 11107660.0, b: 3.96205090, c: 213.29909544 },
    Term { a: 1414151.0, b: 4.5858152, c: 7.1135470 },
    Term { a: 398379.0, b: 0.521120, c: 206.185548 },
    Term { a: 350769.0, b: 3.303299, c: 426.598191 },
    Term { a: 206816.0, b: 0.246584, c: 103.092774 },
    Term { a: 79271.0, b: 3.84007, c: 220.41264 },
    Term { a: 23990.0, b: 4.66977, c: 110.20632 },
    Term { a: 16574.0, b: 0.43719, c: 419.48464 },
    Term { a: 15820.0, b: 0.93809, c: 632.78374 },
    Term { a: 15054.0, b: 2.71670, c: 639.89729 },
    Term { a: 14907.0, b: 5.76903, c: 316.39187 },
    Term { a: 14610.0, b: 1.56519, c: 3.93215 },
    Term { a: 13160.0, b: 4.44891, c: 14.22709 },
    Term { a: 13005.0, b: 5.98119, c: 11.04570 },
    Term { a: 10725.0, b: 3.12940, c: 202.25340 },
    Term { a: 6126.0, b: 1.7633, c: 277.0350 },
    Term { a: 5863.0, b: 0.2366, c: 529.6910 },
    Term { a: 5228.0, b: 4.2078, c: 3.1814 },
    Term { a: 5020.0, b: 3.1779, c: 433.7117 },
    Term { a: 4593.0, b: 0.6198, c: 199.0720 },
    Term { a: 4006.0, b: 2.2448, c: 63.7359 },
    Term { a: 3874.0, b: 3.2228, c: 138.5175 },
    Term { a: 3269.0, b: 0.7749, c: 949.1756 },
    Term { a: 2954.0, b: 0.9828, c: 95.9792 },
    Term { a: 2461.0, b: 3.4216, c: 9.5612 },
    Term { a: 1758.0, b: 3.1358, c: 846.0828 },
    Term { a: 1640.0, b: 5.5050, c: 536.8045 },
    Term { a: 1581.0, b: 4.3727, c: 742.9901 },
    Term { a: 1391.0, b: 4.0233, c: 8.0768 },
    Term { a: 1124.0, b: 2.8373, c: 312.1991 },
    Term { a: 1087.0, b: 4.1834, c: 1.4845 },
    Term { a: 1017.0, b: 3.7170, c: 13.3218 },
];

const L1: &[Term] = &[
    Term { a: 21354295596.0, b: 0.0, c: 0.0 },
    Term { a: 1296855.0, b: 1.8282054, c: 213.2990954 },
    Term { a: 564348.0, b: 2.885001, c: 7.113547 },
    Term { a: 107679.0, b: 2.277699, c: 206.185548 },
    Term { a: 98323.0, b: 1.08070, c: 426.59819 },
    Term { a: 40255.0, b: 2.04128, c: 220.41264 },
    Term { a: 19942.0, b: 1.27955, c: 103.09277 },
    Term { a: 10512.0, b: 2.74880, c: 14.22709 },
    Term { a: 6939.0, b: 0.4049, c: 639.8973 },
    Term { a: 4803.0, b: 2.4419, c: 419.4846 },
    Term { a: 4056.0, b: 2.9217, c: 110.2063 },
    Term { a: 3769.0, b: 3.6497, c: 3.9322 },
    Term { a: 3385.0, b: 2.4169, c: 3.1814 },
    Term { a: 3302.0, b: 1.2626, c: 433.7117 },
    Term { a: 3071.0, b: 2.3274, c: 199.0720 },
    Term { a: 1953.0, b: 3.5639, c: 11.0457 },
    Term { a: 1249.0, b: 2.6280, c: 95.9792 },
    Term { a: 922.0, b: 1.961, c: 227.526 },
    Term { a: 706.0, b: 4.417, c: 529.691 },
    Term { a: 650.0, b: 6.174, c: 202.253 },
    Term { a: 628.0, b: 6.111, c: 309.278 },
    Term { a: 487.0, b: 6.040, c: 853.196 },
    Term { a: 479.0, b: 4.988, c: 522.577 },
    Term { a: 468.0, b: 4.617, c: 63.736 },
    Term { a: 417.0, b: 2.117, c: 323.505 },
    Term { a: 408.0, b: 1.299, c: 209.367 },
    Term { a: 352.0, b: 2.317, c: 632.784 },
    Term { a: 344.0, b: 3.959, c: 412.371 },
    Term { a: 340.0, b: 3.634, c: 316.392 },
    Term { a: 336.0, b: 3.772, c: 735.877 },
    Term { a: 332.0, b: 2.861, c: 210.118 },
    Term { a: 289.0, b: 2.733, c: 117.320 },
    Term { a: 281.0, b: 5.744, c: 2.448 },
    Term { a: 266.0, b: 0.543, c: 647.011 },
    Term { a: 230.0, b: 1.644, c: 216.480 },
    Term { a: 192.0, b: 2.965, c: 224.345 },
    Term { a: 173.0, b: 4.077, c: 846.083 },
    Term { a: 167.0, b: 2.597, c: 21.341 },
    Term { a: 136.0, b: 2.286, c: 10.295 },
    Term { a: 131.0, b: 3.441, c: 742.990 },
    Term { a: 128.0, b: 4.095, c: 217.231 },
    Term { a: 109.0, b: 6.161, c: 415.552 },
    Term { a: 98.0, b: 4.73, c: 838.97 },
    Term { a: 94.0, b: 3.48, c: 1052.27 },
    Term { a: 92.0, b: 3.95, c: 88.87 },
    Term { a: 87.0, b: 1.22, c: 440.83 },
    Term { a: 83.0, b: 3.11, c: 625.67 },
    Term { a: 78.0, b: 6.24, c: 302.16 },
    Term { a: 67.0, b: 0.29, c: 4.67 },
    Term { a: 66.0, b: 5.65, c: 9.56 },
    Term { a: 62.0, b: 4.29, c: 127.47 },
    Term { a: 62.0, b: 1.83, c: 195.14 },
    Term { a: 58.0, b: 2.48, c: 191.96 },
    Term { a: 57.0, b: 5.02, c: 137.03 },
    Term { a: 55.0, b: 0.28, c: 74.78 },
    Term { a: 54.0, b: 5.13, c: 490.33 },
    Term { a: 51.0, b: 1.46, c: 536.80 },
    Term { a: 47.0, b: 1.18, c: 149.56 },
    Term { a: 47.0, b: 5.15, c: 515.46 },
    Term { a: 46.0, b: 2.23, c: 956.29 },
    Term { a: 44.0, b: 2.71, c: 5.42 },
    Term { a: 40.0, b: 0.41, c: 269.92 },
    Term { a: 40.0, b: 3.89, c: 728.76 },
    Term { a: 38.0, b: 0.65, c: 422.67 },
    Term { a: 38.0, b: 2.53, c: 12.53 },
    Term { a: 37.0, b: 3.78, c: 2.92 },
    Term { a: 35.0, b: 6.08, c: 5.94 },
    Term { a: 34.0, b: 3.21, c: 1368.66 },
    Term { a: 33.0, b: 4.64, c: 277.03 },
    Term { a: 33.0, b: 5.43, c: 1066.50 },
    Term { a: 33.0, b: 0.30, c: 351.82 },
    Term { a: 32.0, b: 4.39, c: 1155.36 },
    Term { a: 31.0, b: 2.43, c: 52.69 },
    Term { a: 30.0, b: 2.84, c: 203.00 },
    Term { a: 30.0, b: 6.19, c: 284.15 },
    Term { a: 30.0, b: 3.39, c: 1059.38 },
    Term { a: 29.0, b: 2.03, c: 330.62 },
    Term { a: 28.0, b: 2.74, c: 265.99 },
    Term { a: 26.0, b: 4.51, c: 340.77 },
];

const L2: &[Term] = &[
    Term { a: 116441.0, b: 1.179879, c: 7.113547 },
    Term { a: 91921.0, b: 0.07425, c: 213.29910 },
    Term { a: 90592.0, b: 0.0, c: 0.0 },
    Term { a: 15277.0, b: 4.06492, c: 206.18555 },
    Term { a: 10631.0, b: 0.25778, c: 220.41264 },
    Term { a: 10605.0, b: 5.40964, c: 426.59819 },
    Term { a: 4265.0, b: 1.0460, c: 14.2271 },
    Term { a: 1216.0, b: 2.9186, c: 103.0928 },
    Term { a: 1165.0, b: 4.6094, c: 639.8973 },
    Term { a: 1082.0, b: 5.6913, c: 433.7117 },
    Term { a: 1045.0, b: 4.0421, c: 199.0720 },
    Term { a: 1020.0, b: 0.6337, c: 3.1814 },
    Term { a: 634.0, b: 4.388, c: 419.485 },
    Term { a: 549.0, b: 5.573, c: 3.932 },
    Term { a: 457.0, b: 1.268, c: 110.206 },
    Term { a: 425.0, b: 0.209, c: 227.526 },
    Term { a: 274.0, b: 4.288, c: 95.979 },
    Term { a: 162.0, b: 1.381, c: 11.046 },
    Term { a: 129.0, b: 1.566, c: 309.278 },
    Term { a: 117.0, b: 3.881, c: 853.196 },
    Term { a: 105.0, b: 4.900, c: 647.011 },
    Term { a: 101.0, b: 0.893, c: 21.341 },
    Term { a: 96.0, b: 2.91, c: 316.39 },
    Term { a: 95.0, b: 5.63, c: 412.37 },
    Term { a: 85.0, b: 5.73, c: 209.37 },
    Term { a: 83.0, b: 6.05, c: 216.48 },
    Term { a: 82.0, b: 1.02, c: 117.32 },
    Term { a: 75.0, b: 4.76, c: 210.12 },
    Term { a: 67.0, b: 0.46, c: 522.58 },
    Term { a: 66.0, b: 0.48, c: 10.29 },
    Term { a: 64.0, b: 0.35, c: 323.51 },
    Term { a: 61.0, b: 4.88, c: 632.78 },
    Term { a: 53.0, b: 2.75, c: 529.69 },
    Term { a: 46.0, b: 5.69, c: 440.83 },
    Term { a: 45.0, b: 1.67, c: 202.25 },
    Term { a: 42.0, b: 5.71, c: 88.87 },
    Term { a: 32.0, b: 0.07, c: 63.74 },
    Term { a: 32.0, b: 1.67, c: 302.16 },
    Term { a: 31.0, b: 4.16, c: 191.96 },
    Term { a: 27.0, b: 0.83, c: 224.34 },
    Term { a: 25.0, b: 5.66, c: 735.88 },
    Term { a: 20.0, b: 5.94, c: 217.23 },
    Term { a: 18.0, b: 4.90, c: 625.67 },
    Term { a: 17.0, b: 1.63, c: 742.99 },
    Term { a: 16.0, b: 0.58, c: 515.46 },
    Term { a: 14.0, b: 0.21, c: 838.97 },
    Term { a: 14.0, b: 3.76, c: 195.14 },
    Term { a: 12.0, b: 4.72, c: 203.00 },
    Term { a: 12.0, b: 0.13, c: 234.64 },
    Term { a: 12.0, b: 3.12, c: 846.08 },
    Term { a: 11.0, b: 5.92, c: 536.80 },
    Term { a: 11.0, b: 5.60, c: 728.76 },
    Term { a: 11.0, b: 3.20, c: 1066.50 },
    Term { a: 10.0, b: 4.99, c: 422.67 },
    Term { a: 10.0, b: 0.26, c: 330.62 },
    Term { a: 10.0, b: 4.15, c: 860.31 },
    Term { a: 9.0, b: 0.46, c: 956.29 },
    Term { a: 8.0, b: 2.14, c: 269.92 },
    Term { a: 8.0, b: 5.25, c: 429.78 },
    Term { a: 8.0, b: 4.03, c: 9.56 },
    Term { a: 7.0, b: 5.40, c: 1052.27 },
    Term { a: 6.0, b: 4.46, c: 284.15 },
    Term { a: 6.0, b: 5.93, c: 405.26 },
];

const L3: &[Term] = &[
    Term { a: 16039.0, b: 5.73945, c: 7.11355 },
    Term { a: 4250.0, b: 4.5854, c: 213.2991 },
    Term { a: 1907.0, b: 4.7608, c: 220.4126 },
    Term { a: 1466.0, b: 5.9133, c: 206.1855 },
    Term { a: 1162.0, b: 5.6197, c: 14.2271 },
    Term { a: 1067.0, b: 3.6082, c: 426.5982 },
    Term { a: 239.0, b: 3.861, c: 433.712 },
    Term { a: 237.0, b: 5.768, c: 199.072 },
    Term { a: 166.0, b: 5.116, c: 3.181 },
    Term { a: 151.0, b: 2.736, c: 639.897 },
    Term { a: 131.0, b: 4.743, c: 227.526 },
    Term { a: 63.0, b: 0.23, c: 419.48 },
    Term { a: 62.0, b: 4.74, c: 103.09 },
    Term { a: 40.0, b: 5.47, c: 21.34 },
    Term { a: 40.0, b: 5.96, c: 95.98 },
    Term { a: 39.0, b: 5.83, c: 110.21 },
    Term { a: 28.0, b: 3.01, c: 647.01 },
    Term { a: 25.0, b: 0.99, c: 3.93 },
    Term { a: 19.0, b: 1.92, c: 853.20 },
    Term { a: 18.0, b: 4.97, c: 10.29 },
    Term { a: 18.0, b: 1.03, c: 412.37 },
    Term { a: 18.0, b: 4.20, c: 216.48 },
    Term { a: 18.0, b: 3.32, c: 309.28 },
    Term { a: 16.0, b: 3.90, c: 440.83 },
    Term { a: 16.0, b: 5.62, c: 117.32 },
    Term { a: 13.0, b: 1.18, c: 88.87 },
    Term { a: 11.0, b: 5.58, c: 11.05 },
    Term { a: 11.0, b: 5.93, c: 191.96 },
    Term { a: 10.0, b: 3.95, c: 209.37 },
    Term { a: 9.0, b: 3.39, c: 302.16 },
    Term { a: 8.0, b: 4.88, c: 323.51 },
    Term { a: 7.0, b: 0.38, c: 632.78 },
    Term { a: 6.0, b: 2.25, c: 522.58 },
    Term { a: 6.0, b: 1.06, c: 210.12 },
    Term { a: 5.0, b: 4.64, c: 234.64 },
    Term { a: 4.0, b: 3.14, c: 0.0 },
    Term { a: 4.0, b: 2.31, c: 515.46 },
    Term { a: 3.0, b: 2.20, c: 860.31 },
    Term { a: 3.0, b: 0.59, c: 529.69 },
    Term { a: 3.0, b: 4.93, c: 224.34 },
    Term { a: 3.0, b: 0.42, c: 625.67 },
    Term { a: 2.0, b: 4.77, c: 330.62 },
    Term { a: 2.0, b: 3.35, c: 429.78 },
    Term { a: 2.0, b: 3.20, c: 202.25 },
    Term { a: 2.0, b: 1.19, c: 1066.50 },
    Term { a: 2.0, b: 1.35, c: 405.26 },
    Term { a: 2.0, b: 4.16, c: 223.59 },
    Term { a: 2.0, b: 3.07, c: 654.12 },
];

const L4: &[Term] = &[
    Term { a: 1662.0, b: 3.9983, c: 7.1135 },
    Term { a: 257.0, b: 2.984, c: 220.413 },
    Term { a: 236.0, b: 3.902, c: 14.227 },
    Term { a: 149.0, b: 2.741, c: 213.299 },
    Term { a: 114.0, b: 3.142, c: 0.0 },
    Term { a: 110.0, b: 1.515, c: 206.186 },
    Term { a: 68.0, b: 1.72, c: 426.60 },
    Term { a: 40.0, b: 2.05, c: 433.71 },
    Term { a: 38.0, b: 1.24, c: 199.07 },
    Term { a: 31.0, b: 3.01, c: 227.53 },
    Term { a: 15.0, b: 0.83, c: 639.90 },
    Term { a: 9.0, b: 3.71, c: 21.34 },
    Term { a: 6.0, b: 2.42, c: 419.48 },
    Term { a: 6.0, b: 1.16, c: 647.01 },
    Term { a: 4.0, b: 1.45, c: 95.98 },
    Term { a: 4.0, b: 2.12, c: 440.83 },
    Term { a: 3.0, b: 4.09, c: 110.21 },
    Term { a: 3.0, b: 2.77, c: 412.37 },
    Term { a: 3.0, b: 3.01, c: 88.87 },
    Term { a: 3.0, b: 0.00, c: 853.20 },
    Term { a: 3.0, b: 0.39, c: 103.09 },
    Term { a: 2.0, b: 3.78, c: 117.32 },
    Term { a: 2.0, b: 2.83, c: 234.64 },
    Term { a: 2.0, b: 5.08, c: 309.28 },
    Term { a: 2.0, b: 2.24, c: 216.48 },
    Term { a: 2.0, b: 5.19, c: 302.16 },
    Term { a: 1.0, b: 1.55, c: 191.96 },
];

const L5: &[Term] = &[
    Term { a: 124.0, b: 2.259, c: 7.114 },
    Term { a: 34.0, b: 2.16, c: 14.23 },
    Term { a: 28.0, b: 1.20, c: 220.41 },
    Term { a: 6.0, b: 1.22, c: 227.53 },
    Term { a: 5.0, b: 0.24, c: 433.71 },
    Term { a: 4.0, b: 6.23, c: 426.60 },
    Term { a: 3.0, b: 2.97, c: 199.07 },
    Term { a: 3.0, b: 4.29, c: 206.19 },
    Term { a: 2.0, b: 6.25, c: 213.30 },
    Term { a: 1.0, b: 5.28, c: 639.90 },
    Term { a: 1.0, b: 0.24, c: 440.83 },
    Term { a: 1.0, b: 3.14, c: 0.0 },
];

const B0: &[Term] = &[
    Term { a: 4330678.0, b: 3.6028443, c: 213.2990954 },
    Term { a: 240348.0, b: 2.852385, c: 426.598191 },
    Term { a: 84746.0, b: 0.0, c: 0.0 },
    Term { a: 34116.0, b: 0.57297, c: 206.18555 },
    Term { a: 30863.0, b: 3.48442, c: 220.41264 },
    Term { a: 14734.0, b: 2.11847, c: 639.89729 },
    Term { a: 9917.0, b: 5.7900, c: 419.4846 },
    Term { a: 6994.0, b: 4.7360, c: 7.1135 },
    Term { a: 4808.0, b: 5.4331, c: 316.3919 },
    Term { a: 4788.0, b: 4.9651, c: 110.2063 },
    Term { a: 3432.0, b: 2.7326, c: 433.7117 },
    Term { a: 1506.0, b: 6.0130, c: 103.0928 },
    Term { a: 1060.0, b: 5.6310, c: 529.6910 },
    Term { a: 969.0, b: 5.204, c: 632.784 },
    Term { a: 942.0, b: 1.396, c: 853.196 },
    Term { a: 708.0, b: 3.803, c: 323.505 },
    Term { a: 552.0, b: 5.131, c: 202.253 },
    Term { a: 400.0, b: 3.359, c: 227.526 },
    Term { a: 319.0, b: 3.626, c: 209.367 },
    Term { a: 316.0, b: 1.997, c: 647.011 },
    Term { a: 314.0, b: 0.465, c: 217.231 },
    Term { a: 284.0, b: 4.886, c: 224.345 },
    Term { a: 236.0, b: 2.139, c: 11.046 },
    Term { a: 215.0, b: 5.950, c: 846.083 },
    Term { a: 209.0, b: 2.120, c: 415.552 },
    Term { a: 207.0, b: 0.730, c: 199.072 },
    Term { a: 179.0, b: 2.954, c: 63.736 },
    Term { a: 141.0, b: 0.644, c: 490.334 },
    Term { a: 139.0, b: 4.595, c: 14.227 },
    Term { a: 139.0, b: 1.998, c: 735.877 },
    Term { a: 135.0, b: 5.245, c: 742.990 },
    Term { a: 122.0, b: 3.115, c: 522.577 },
    Term { a: 116.0, b: 3.109, c: 216.480 },
    Term { a: 114.0, b: 0.963, c: 210.118 },
];

const B1: &[Term] = &[
    Term { a: 397555.0, b: 5.332900, c: 213.299095 },
    Term { a: 49479.0, b: 3.14159, c: 0.0 },
    Term { a: 18572.0, b: 6.09919, c: 426.59819 },
    Term { a: 14801.0, b: 2.30586, c: 206.18555 },
    Term { a: 9644.0, b: 1.6967, c: 220.4126 },
    Term { a: 3757.0, b: 1.2543, c: 419.4846 },
    Term { a: 2717.0, b: 5.9117, c: 639.8973 },
    Term { a: 1455.0, b: 0.8516, c: 433.7117 },
    Term { a: 1291.0, b: 2.9177, c: 7.1135 },
    Term { a: 853.0, b: 0.436, c: 316.392 },
    Term { a: 298.0, b: 0.919, c: 632.784 },
    Term { a: 292.0, b: 5.316, c: 110.206 },
    Term { a: 284.0, b: 1.619, c: 227.526 },
    Term { a: 275.0, b: 3.889, c: 103.093 },
    Term { a: 172.0, b: 0.052, c: 647.011 },
    Term { a: 166.0, b: 2.444, c: 199.072 },
    Term { a: 158.0, b: 5.209, c: 209.367 },
    Term { a: 110.0, b: 2.457, c: 217.231 },
];

const B2: &[Term] = &[
    Term { a: 20630.0, b: 0.50482, c: 213.29910 },
    Term { a: 3720.0, b: 3.9983, c: 206.1855 },
    Term { a: 1627.0, b: 6.1819, c: 220.4126 },
    Term { a: 1346.0, b: 0.0, c: 0.0 },
    Term { a: 706.0, b: 3.039, c: 419.485 },
    Term { a: 365.0, b: 5.099, c: 426.598 },
    Term { a: 330.0, b: 5.279, c: 433.712 },
    Term { a: 219.0, b: 3.828, c: 639.897 },
    Term { a: 139.0, b: 1.043, c: 7.114 },
    Term { a: 104.0, b: 6.157, c: 227.526 },
    Term { a: 93.0, b: 1.98, c: 316.39 },
    Term { a: 71.0, b: 4.15, c: 199.07 },
    Term { a: 52.0, b: 2.88, c: 632.78 },
    Term { a: 49.0, b: 4.43, c: 647.01 },
    Term { a: 41.0, b: 3.16, c: 853.20 },
    Term { a: 29.0, b: 4.53, c: 210.12 },
    Term { a: 24.0, b: 1.12, c: 14.23 },
    Term { a: 21.0, b: 4.35, c: 217.23 },
    Term { a: 20.0, b: 5.31, c: 440.83 },
    Term { a: 18.0, b: 0.85, c: 110.21 },
    Term { a: 17.0, b: 5.68, c: 216.48 },
    Term { a: 16.0, b: 4.26, c: 103.09 },
    Term { a: 14.0, b: 3.00, c: 412.37 },
    Term { a: 12.0, b: 2.53, c: 529.69 },
    Term { a: 8.0, b: 3.32, c: 202.25 },
    Term { a: 7.0, b: 5.56, c: 209.37 },
    Term { a: 7.0, b: 0.29, c: 323.51 },
    Term { a: 6.0, b: 1.16, c: 117.32 },
    Term { a: 6.0, b: 3.61, c: 860.31 },
];

const B3: &[Term] = &[
    Term { a: 666.0, b: 1.990, c: 213.299 },
    Term { a: 632.0, b: 5.698, c: 206.186 },
    Term { a: 398.0, b: 0.0, c: 0.0 },
    Term { a: 188.0, b: 4.338, c: 220.413 },
    Term { a: 92.0, b: 4.84, c: 419.48 },
    Term { a: 52.0, b: 3.42, c: 433.71 },
    Term { a: 42.0, b: 2.38, c: 426.60 },
    Term { a: 26.0, b: 4.40, c: 227.53 },
    Term { a: 21.0, b: 5.85, c: 199.07 },
    Term { a: 18.0, b: 1.99, c: 639.90 },
    Term { a: 11.0, b: 5.37, c: 7.11 },
    Term { a: 10.0, b: 2.55, c: 647.01 },
    Term { a: 7.0, b: 3.46, c: 316.39 },
    Term { a: 6.0, b: 4.80, c: 632.78 },
    Term { a: 6.0, b: 0.02, c: 210.12 },
    Term { a: 6.0, b: 3.52, c: 440.83 },
    Term { a: 5.0, b: 5.64, c: 14.23 },
    Term { a: 5.0, b: 1.22, c: 853.20 },
    Term { a: 4.0, b: 4.71, c: 412.37 },
    Term { a: 3.0, b: 0.63, c: 103.09 },
    Term { a: 2.0, b: 3.72, c: 216.48 },
];

const B4: &[Term] = &[
    Term { a: 80.0, b: 1.12, c: 206.19 },
    Term { a: 32.0, b: 3.12, c: 213.30 },
    Term { a: 17.0, b: 2.48, c: 220.41 },
    Term { a: 12.0, b: 3.14, c: 0.0 },
    Term { a: 9.0, b: 0.38, c: 419.48 },
    Term { a: 6.0, b: 1.56, c: 433.71 },
    Term { a: 5.0, b: 2.63, c: 227.53 },
    Term { a: 5.0, b: 1.28, c: 199.07 },
    Term { a: 1.0, b: 1.43, c: 426.60 },
    Term { a: 1.0, b: 0.67, c: 647.01 },
    Term { a: 1.0, b: 1.72, c: 440.83 },
    Term { a: 1.0, b: 6.18, c: 639.90 },
];

const B5: &[Term] = &[
    Term { a: 8.0, b: 2.82, c: 206.19 },
    Term { a: 1.0, b: 0.51, c: 220.41 },
];

const R0: &[Term] = &[
    Term { a: 955758136.0, b: 0.0, c: 0.0 },
    Term { a: 52921382.0, b: 2.39226220, c: 213.29909544 },
    Term { a: 1873680.0, b: 5.2354961, c: 206.1855484 },
    Term { a: 1464664.0, b: 1.6476305, c: 426.5981909 },
    Term { a: 821891.0, b: 5.935200, c: 316.391870 },
    Term { a: 547507.0, b: 5.015326, c: 103.092774 },
    Term { a: 371684.0, b: 2.271148, c: 220.412642 },
    Term { a: 361778.0, b: 3.139043, c: 7.113547 },
    Term { a: 140618.0, b: 5.704067, c: 632.783739 },
    Term { a: 108975.0, b: 3.293136, c: 110.206321 },
    Term { a: 69007.0, b: 5.94100, c: 419.48464 },
    Term { a: 61053.0, b: 0.94038, c: 639.89729 },
    Term { a: 48913.0, b: 1.55733, c: 202.25340 },
    Term { a: 34144.0, b: 0.19519, c: 277.03499 },
    Term { a: 32402.0, b: 5.47085, c: 949.17561 },
    Term { a: 20937.0, b: 0.46349, c: 735.87651 },
    Term { a: 20839.0, b: 1.52103, c: 433.71174 },
    Term { a: 20747.0, b: 5.33256, c: 199.07200 },
    Term { a: 15298.0, b: 3.05944, c: 529.69097 },
    Term { a: 14296.0, b: 2.60434, c: 323.50542 },
    Term { a: 12884.0, b: 1.64892, c: 138.51750 },
    Term { a: 11993.0, b: 5.98051, c: 846.08283 },
    Term { a: 11380.0, b: 1.73106, c: 522.57742 },
    Term { a: 9796.0, b: 5.2048, c: 1265.5675 },
    Term { a: 7753.0, b: 5.8519, c: 95.9792 },
    Term { a: 6771.0, b: 3.0043, c: 14.2271 },
    Term { a: 6466.0, b: 0.1773, c: 1052.2684 },
    Term { a: 5850.0, b: 1.4552, c: 415.5525 },
    Term { a: 5307.0, b: 0.5974, c: 63.7359 },
    Term { a: 4696.0, b: 2.1492, c: 227.5262 },
    Term { a: 4044.0, b: 1.6401, c: 209.3669 },
    Term { a: 3688.0, b: 0.7802, c: 412.3711 },
    Term { a: 3461.0, b: 1.8509, c: 175.1661 },
    Term { a: 3420.0, b: 4.9455, c: 1581.9593 },
    Term { a: 3401.0, b: 0.5539, c: 350.3321 },
    Term { a: 3376.0, b: 3.6953, c: 224.3448 },
    Term { a: 2976.0, b: 5.6847, c: 210.1177 },
    Term { a: 2885.0, b: 1.3876, c: 838.9693 },
    Term { a: 2881.0, b: 0.1796, c: 853.1964 },
    Term { a: 2508.0, b: 3.5385, c: 742.9901 },
    Term { a: 2448.0, b: 6.1841, c: 1368.6603 },
    Term { a: 2406.0, b: 2.9656, c: 117.3199 },
    Term { a: 2174.0, b: 0.0151, c: 340.7709 },
    Term { a: 2024.0, b: 5.0541, c: 11.0457 },
];

const R1: &[Term] = &[
    Term { a: 6182981.0, b: 0.2584352, c: 213.2990954 },
    Term { a: 506578.0, b: 0.711147, c: 206.185548 },
    Term { a: 341394.0, b: 5.796358, c: 426.598191 },
    Term { a: 188491.0, b: 0.472157, c: 220.412642 },
    Term { a: 186262.0, b: 3.141593, c: 0.0 },
    Term { a: 143891.0, b: 1.407449, c: 7.113547 },
    Term { a: 49621.0, b: 6.01744, c: 103.09277 },
    Term { a: 20928.0, b: 5.09246, c: 639.89729 },
    Term { a: 19953.0, b: 1.17560, c: 419.48464 },
    Term { a: 18840.0, b: 1.60820, c: 110.20632 },
    Term { a: 13877.0, b: 0.75886, c: 199.07200 },
    Term { a: 12893.0, b: 5.94330, c: 433.71174 },
    Term { a: 5397.0, b: 1.2885, c: 14.2271 },
    Term { a: 4869.0, b: 0.8679, c: 323.5054 },
    Term { a: 4247.0, b: 0.3930, c: 227.5262 },
    Term { a: 3252.0, b: 1.2585, c: 95.9792 },
    Term { a: 3081.0, b: 3.4366, c: 522.5774 },
    Term { a: 2909.0, b: 4.6068, c: 202.2534 },
    Term { a: 2856.0, b: 2.1673, c: 735.8765 },
    Term { a: 1988.0, b: 2.4505, c: 412.3711 },
    Term { a: 1941.0, b: 6.0239, c: 209.3669 },
    Term { a: 1581.0, b: 1.2919, c: 210.1177 },
    Term { a: 1340.0, b: 4.3080, c: 853.1964 },
    Term { a: 1316.0, b: 1.2530, c: 117.3199 },
    Term { a: 1203.0, b: 1.8665, c: 316.3919 },
    Term { a: 1091.0, b: 0.0753, c: 216.4805 },
    Term { a: 966.0, b: 0.480, c: 632.784 },
    Term { a: 954.0, b: 5.152, c: 647.011 },
    Term { a: 898.0, b: 0.983, c: 529.691 },
    Term { a: 882.0, b: 1.885, c: 1052.268 },
    Term { a: 874.0, b: 1.402, c: 224.345 },
    Term { a: 785.0, b: 3.064, c: 838.969 },
    Term { a: 740.0, b: 1.382, c: 625.670 },
    Term { a: 658.0, b: 4.144, c: 309.278 },
    Term { a: 650.0, b: 1.725, c: 742.990 },
    Term { a: 613.0, b: 3.033, c: 63.736 },
    Term { a: 599.0, b: 2.549, c: 217.231 },
    Term { a: 503.0, b: 2.130, c: 3.932 },
];

const R2: &[Term] = &[
    Term { a: 436902.0, b: 4.786717, c: 213.299095 },
    Term { a: 71923.0, b: 2.50070, c: 206.18555 },
    Term { a: 49767.0, b: 4.97168, c: 220.41264 },
    Term { a: 43221.0, b: 3.86940, c: 426.59819 },
    Term { a: 29646.0, b: 5.96310, c: 7.11355 },
    Term { a: 4721.0, b: 2.4753, c: 199.0720 },
    Term { a: 4142.0, b: 4.1067, c: 433.7117 },
    Term { a: 3789.0, b: 3.0977, c: 639.8973 },
    Term { a: 2964.0, b: 1.3721, c: 103.0928 },
    Term { a: 2556.0, b: 2.8507, c: 419.4846 },
    Term { a: 2327.0, b: 0.0, c: 0.0 },
    Term { a: 2208.0, b: 6.2759, c: 110.2063 },
    Term { a: 2188.0, b: 5.8555, c: 14.2271 },
    Term { a: 1957.0, b: 4.9245, c: 227.5262 },
    Term { a: 924.0, b: 5.464, c: 323.505 },
    Term { a: 706.0, b: 2.971, c: 95.979 },
    Term { a: 546.0, b: 4.129, c: 412.371 },
    Term { a: 431.0, b: 5.178, c: 522.577 },
    Term { a: 405.0, b: 4.173, c: 209.367 },
    Term { a: 391.0, b: 4.481, c: 216.480 },
    Term { a: 374.0, b: 5.834, c: 117.320 },
    Term { a: 361.0, b: 3.277, c: 647.011 },
    Term { a: 356.0, b: 3.192, c: 210.118 },
    Term { a: 326.0, b: 2.269, c: 853.196 },
    Term { a: 207.0, b: 4.022, c: 735.877 },
    Term { a: 204.0, b: 0.088, c: 202.253 },
    Term { a: 180.0, b: 3.597, c: 632.784 },
    Term { a: 178.0, b: 4.097, c: 440.825 },
    Term { a: 154.0, b: 3.135, c: 625.670 },
    Term { a: 148.0, b: 0.136, c: 302.165 },
    Term { a: 133.0, b: 2.594, c: 191.958 },
    Term { a: 132.0, b: 5.933, c: 309.278 },
];

const R3: &[Term] = &[
    Term { a: 20315.0, b: 3.02187, c: 213.29910 },
    Term { a: 8924.0, b: 3.1914, c: 220.4126 },
    Term { a: 6909.0, b: 4.3517, c: 206.1855 },
    Term { a: 4087.0, b: 4.2241, c: 7.1135 },
    Term { a: 3879.0, b: 2.0106, c: 426.5982 },
    Term { a: 1071.0, b: 4.2036, c: 199.0720 },
    Term { a: 907.0, b: 2.283, c: 433.712 },
    Term { a: 606.0, b: 3.175, c: 227.526 },
    Term { a: 597.0, b: 4.135, c: 14.227 },
    Term { a: 483.0, b: 1.173, c: 639.897 },
    Term { a: 393.0, b: 0.0, c: 0.0 },
    Term { a: 229.0, b: 4.698, c: 419.485 },
    Term { a: 188.0, b: 4.590, c: 110.206 },
    Term { a: 150.0, b: 3.202, c: 103.093 },
    Term { a: 121.0, b: 3.768, c: 323.505 },
    Term { a: 102.0, b: 4.710, c: 95.979 },
    Term { a: 101.0, b: 5.819, c: 412.371 },
    Term { a: 93.0, b: 1.44, c: 647.01 },
    Term { a: 84.0, b: 2.63, c: 216.48 },
    Term { a: 73.0, b: 4.15, c: 117.32 },
    Term { a: 62.0, b: 2.31, c: 440.83 },
    Term { a: 55.0, b: 0.31, c: 853.20 },
    Term { a: 50.0, b: 2.39, c: 209.37 },
    Term { a: 45.0, b: 4.37, c: 191.96 },
    Term { a: 41.0, b: 0.69, c: 522.58 },
    Term { a: 40.0, b: 1.84, c: 302.16 },
    Term { a: 38.0, b: 5.94, c: 88.87 },
    Term { a: 32.0, b: 4.01, c: 21.34 },
];

const R4: &[Term] = &[
    Term { a: 1202.0, b: 1.4150, c: 220.4126 },
    Term { a: 708.0, b: 1.162, c: 213.299 },
    Term { a: 516.0, b: 6.240, c: 206.186 },
    Term { a: 427.0, b: 2.469, c: 7.114 },
    Term { a: 268.0, b: 0.187, c: 426.598 },
    Term { a: 170.0, b: 5.959, c: 199.072 },
    Term { a: 150.0, b: 0.480, c: 433.712 },
    Term { a: 145.0, b: 1.442, c: 227.526 },
    Term { a: 121.0, b: 2.405, c: 14.227 },
    Term { a: 47.0, b: 5.57, c: 639.90 },
    Term { a: 19.0, b: 5.86, c: 647.01 },
    Term { a: 17.0, b: 0.53, c: 440.83 },
    Term { a: 16.0, b: 2.90, c: 110.21 },
    Term { a: 15.0, b: 0.30, c: 419.48 },
    Term { a: 14.0, b: 1.30, c: 412.37 },
    Term { a: 13.0, b: 2.09, c: 323.51 },
    Term { a: 11.0, b: 0.22, c: 95.98 },
    Term { a: 11.0, b: 2.46, c: 117.32 },
    Term { a: 10.0, b: 3.14, c: 0.0 },
    Term { a: 9.0, b: 1.56, c: 88.87 },
    Term { a: 9.0, b: 2.28, c: 21.34 },
    Term { a: 9.0, b: 0.68, c: 216.48 },
    Term { a: 8.0, b: 1.27, c: 234.64 },
];

const R5: &[Term] = &[
    Term { a: 129.0, b: 5.913, c: 220.413 },
    Term { a: 32.0, b: 0.69, c: 7.11 },
    Term { a: 27.0, b: 5.91, c: 227.53 },
    Term { a: 20.0, b: 4.95, c: 433.71 },
    Term { a: 20.0, b: 0.67, c: 14.23 },
    Term { a: 14.0, b: 2.67, c: 206.19 },
    Term { a: 14.0, b: 1.46, c: 199.07 },
    Term { a: 13.0, b: 4.59, c: 426.60 },
    Term { a: 7.0, b: 4.63, c: 213.30 },
    Term { a: 5.0, b: 3.61, c: 639.90 },
    Term { a: 4.0, b: 4.90, c: 440.83 },
    Term { a: 3.0, b: 4.07, c: 647.01 },
    Term { a: 3.0, b: 4.66, c: 191.96 },
    Term { a: 3.0, b: 0.49, c: 323.51 },
    Term { a: 3.0, b: 3.18, c: 419.48 },
    Term { a: 2.0, b: 3.70, c: 88.87 },
    Term { a: 2.0, b: 3.32, c: 95.98 },
    Term { a: 2.0, b: 0.56, c: 117.32 },
];
