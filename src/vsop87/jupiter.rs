#![allow(clippy::excessive_precision)]
//! VSOP87D series for Jupiter
//!
//! Heliocentric coordinates referred to the mean dynamical ecliptic and equinox of date.
//! Abridged series, 488 terms. Amplitudes are in units of 1e-8 rad (L, B) and 1e-8 AU (R).

use super::{PlanetSeries, Term};

pub const JUPITER: PlanetSeries = PlanetSeries {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4, B5],
    radius: &[R0, R1, R2, R3, R4, R5],
};

const L0: &[Term] = &[
    Term { a: 59954691.0, b: 0.0, c: 0.0 },
    Term { a: 9695899.0, b: 5.0619179, c: 529.6909651 },
    Term { a: 573610.0, b: 1.444062, c: 7.113547 },
    Term { a: 306389.0, b: 5.417347, c: 1059.381930 },
    Term { a: 97178.0, b: 4.14265, c: 632.78374 },
    Term { a: 72903.0, b: 3.64043, c: 522.57742 },
    Term { a: 64264.0, b: 3.41145, c: 103.09277 },
    Term { a: 39806.0, b: 2.29377, c: 419.48464 },
    Term { a: 38858.0, b: 1.27232, c: 316.39187 },
    Term { a: 27965.0, b: 1.78455, c: 536.80451 },
    Term { a: 13590.0, b: 5.77481, c: 1589.07290 },
    Term { a: 8769.0, b: 3.6300, c: 949.1756 },
    Term { a: 8246.0, b: 3.5823, c: 206.1855 },
    Term { a: 7368.0, b: 5.0810, c: 735.8765 },
    Term { a: 6263.0, b: 0.0250, c: 213.2991 },
    Term { a: 6114.0, b: 4.5132, c: 1162.4747 },
    Term { a: 5305.0, b: 4.1863, c: 1052.2684 },
    Term { a: 5305.0, b: 1.3067, c: 14.2271 },
    Term { a: 4905.0, b: 1.3208, c: 110.2063 },
    Term { a: 4647.0, b: 4.6996, c: 3.9322 },
    Term { a: 3045.0, b: 4.3168, c: 426.5982 },
    Term { a: 2610.0, b: 1.5667, c: 846.0828 },
    Term { a: 2028.0, b: 1.0638, c: 3.1814 },
    Term { a: 1921.0, b: 0.9717, c: 639.8973 },
    Term { a: 1765.0, b: 2.1415, c: 1066.4955 },
    Term { a: 1723.0, b: 3.8804, c: 1265.5675 },
    Term { a: 1633.0, b: 3.5820, c: 515.4639 },
    Term { a: 1432.0, b: 4.2968, c: 625.6702 },
    Term { a: 973.0, b: 4.098, c: 95.979 },
    Term { a: 884.0, b: 2.437, c: 412.371 },
    Term { a: 733.0, b: 6.085, c: 838.969 },
    Term { a: 731.0, b: 3.806, c: 1581.959 },
    Term { a: 709.0, b: 1.293, c: 742.990 },
    Term { a: 692.0, b: 6.134, c: 2118.764 },
    Term { a: 614.0, b: 4.109, c: 1478.867 },
    Term { a: 582.0, b: 4.540, c: 309.278 },
    Term { a: 495.0, b: 3.756, c: 323.505 },
    Term { a: 441.0, b: 2.958, c: 454.909 },
    Term { a: 417.0, b: 1.036, c: 2.448 },
    Term { a: 390.0, b: 4.897, c: 1692.166 },
    Term { a: 376.0, b: 4.703, c: 1368.660 },
    Term { a: 341.0, b: 5.715, c: 533.623 },
    Term { a: 330.0, b: 4.740, c: 0.048 },
    Term { a: 262.0, b: 1.877, c: 0.963 },
    Term { a: 261.0, b: 0.820, c: 380.128 },
    Term { a: 257.0, b: 3.724, c: 199.072 },
    Term { a: 244.0, b: 5.220, c: 728.763 },
    Term { a: 235.0, b: 1.227, c: 909.819 },
    Term { a: 220.0, b: 1.651, c: 543.918 },
    Term { a: 207.0, b: 1.855, c: 525.759 },
    Term { a: 202.0, b: 1.807, c: 1375.774 },
    Term { a: 197.0, b: 5.293, c: 1155.361 },
    Term { a: 175.0, b: 3.730, c: 942.062 },
    Term { a: 175.0, b: 3.226, c: 1898.351 },
    Term { a: 175.0, b: 5.910, c: 956.289 },
    Term { a: 158.0, b: 4.365, c: 1795.258 },
    Term { a: 151.0, b: 3.906, c: 74.782 },
    Term { a: 149.0, b: 4.377, c: 1685.052 },
    Term { a: 141.0, b: 3.136, c: 491.558 },
    Term { a: 138.0, b: 1.318, c: 1169.588 },
    Term { a: 131.0, b: 4.169, c: 1045.155 },
    Term { a: 117.0, b: 2.500, c: 1596.186 },
    Term { a: 117.0, b: 2.843, c: 220.413 },
    Term { a: 110.0, b: 1.478, c: 1272.681 },
];

const L1: &[Term] = &[
    Term { a: 52993480757.0, b: 0.0, c: 0.0 },
    Term { a: 489741.0, b: 4.220667, c: 529.690965 },
    Term { a: 228919.0, b: 6.026475, c: 7.113547 },
    Term { a: 27655.0, b: 4.57266, c: 1059.38193 },
    Term { a: 20721.0, b: 5.45939, c: 522.57742 },
    Term { a: 12106.0, b: 0.16986, c: 536.80451 },
    Term { a: 6068.0, b: 4.4242, c: 103.0928 },
    Term { a: 5434.0, b: 3.9848, c: 419.4846 },
    Term { a: 4238.0, b: 5.8901, c: 14.2271 },
    Term { a: 2212.0, b: 5.2677, c: 206.1855 },
    Term { a: 1746.0, b: 4.9267, c: 1589.0729 },
    Term { a: 1296.0, b: 5.5513, c: 3.1814 },
    Term { a: 1173.0, b: 5.8565, c: 1052.2684 },
    Term { a: 1163.0, b: 0.5145, c: 3.9322 },
    Term { a: 1099.0, b: 5.3070, c: 515.4639 },
    Term { a: 1007.0, b: 0.4648, c: 735.8765 },
    Term { a: 1004.0, b: 3.1504, c: 426.5982 },
    Term { a: 848.0, b: 5.758, c: 110.206 },
    Term { a: 827.0, b: 4.803, c: 213.299 },
    Term { a: 816.0, b: 0.586, c: 1066.495 },
    Term { a: 725.0, b: 5.518, c: 639.897 },
    Term { a: 568.0, b: 5.989, c: 625.670 },
    Term { a: 474.0, b: 4.132, c: 412.371 },
    Term { a: 413.0, b: 5.737, c: 95.979 },
    Term { a: 345.0, b: 4.242, c: 632.784 },
    Term { a: 336.0, b: 3.732, c: 1162.475 },
    Term { a: 234.0, b: 4.035, c: 949.176 },
    Term { a: 234.0, b: 6.243, c: 309.278 },
    Term { a: 199.0, b: 1.505, c: 838.969 },
    Term { a: 195.0, b: 2.219, c: 323.505 },
    Term { a: 187.0, b: 6.086, c: 742.990 },
    Term { a: 184.0, b: 6.280, c: 543.918 },
    Term { a: 171.0, b: 5.417, c: 199.072 },
    Term { a: 131.0, b: 0.626, c: 728.763 },
    Term { a: 115.0, b: 0.680, c: 846.083 },
    Term { a: 115.0, b: 5.286, c: 2118.764 },
    Term { a: 108.0, b: 4.493, c: 956.289 },
    Term { a: 80.0, b: 5.82, c: 1045.15 },
    Term { a: 72.0, b: 5.34, c: 942.06 },
    Term { a: 70.0, b: 5.97, c: 532.87 },
    Term { a: 67.0, b: 5.73, c: 21.34 },
    Term { a: 66.0, b: 0.13, c: 526.51 },
    Term { a: 65.0, b: 6.09, c: 1581.96 },
    Term { a: 59.0, b: 0.59, c: 1155.36 },
    Term { a: 58.0, b: 0.99, c: 1596.19 },
    Term { a: 57.0, b: 5.97, c: 1169.59 },
    Term { a: 57.0, b: 1.41, c: 533.62 },
    Term { a: 55.0, b: 5.43, c: 10.29 },
    Term { a: 52.0, b: 5.73, c: 117.32 },
    Term { a: 52.0, b: 0.23, c: 1368.66 },
    Term { a: 50.0, b: 6.08, c: 525.76 },
    Term { a: 47.0, b: 3.63, c: 1478.87 },
    Term { a: 47.0, b: 0.51, c: 1265.57 },
    Term { a: 40.0, b: 4.16, c: 1692.17 },
    Term { a: 34.0, b: 0.10, c: 302.16 },
    Term { a: 33.0, b: 5.04, c: 220.41 },
    Term { a: 32.0, b: 5.37, c: 508.35 },
    Term { a: 29.0, b: 5.42, c: 1272.68 },
    Term { a: 29.0, b: 3.36, c: 4.67 },
    Term { a: 29.0, b: 0.76, c: 88.87 },
    Term { a: 25.0, b: 1.61, c: 831.86 },
];

const L2: &[Term] = &[
    Term { a: 47234.0, b: 4.32148, c: 7.11355 },
    Term { a: 38966.0, b: 0.0, c: 0.0 },
    Term { a: 30629.0, b: 2.93021, c: 529.69097 },
    Term { a: 3189.0, b: 1.0550, c: 522.5774 },
    Term { a: 2729.0, b: 4.8455, c: 536.8045 },
    Term { a: 2723.0, b: 3.4141, c: 1059.3819 },
    Term { a: 1721.0, b: 4.1873, c: 14.2271 },
    Term { a: 383.0, b: 5.768, c: 419.485 },
    Term { a: 378.0, b: 0.760, c: 515.464 },
    Term { a: 367.0, b: 6.055, c: 103.093 },
    Term { a: 337.0, b: 3.786, c: 3.181 },
    Term { a: 308.0, b: 0.694, c: 206.186 },
    Term { a: 218.0, b: 3.814, c: 1589.073 },
    Term { a: 199.0, b: 5.340, c: 1066.495 },
    Term { a: 197.0, b: 2.484, c: 3.932 },
    Term { a: 156.0, b: 1.406, c: 1052.268 },
    Term { a: 146.0, b: 3.814, c: 639.897 },
    Term { a: 142.0, b: 1.634, c: 426.598 },
    Term { a: 130.0, b: 5.837, c: 412.371 },
    Term { a: 117.0, b: 1.414, c: 625.670 },
    Term { a: 97.0, b: 4.03, c: 110.21 },
    Term { a: 91.0, b: 1.11, c: 95.98 },
    Term { a: 87.0, b: 2.52, c: 632.78 },
    Term { a: 79.0, b: 4.64, c: 543.92 },
    Term { a: 72.0, b: 2.22, c: 735.88 },
    Term { a: 58.0, b: 0.83, c: 199.07 },
    Term { a: 57.0, b: 3.12, c: 213.30 },
    Term { a: 49.0, b: 1.67, c: 309.28 },
    Term { a: 40.0, b: 4.02, c: 21.34 },
    Term { a: 40.0, b: 0.62, c: 323.51 },
    Term { a: 36.0, b: 2.33, c: 728.76 },
    Term { a: 29.0, b: 3.61, c: 10.29 },
    Term { a: 28.0, b: 3.24, c: 838.97 },
    Term { a: 26.0, b: 4.50, c: 742.99 },
    Term { a: 26.0, b: 2.51, c: 1162.47 },
    Term { a: 25.0, b: 1.22, c: 1045.15 },
    Term { a: 24.0, b: 3.01, c: 956.29 },
    Term { a: 19.0, b: 4.29, c: 532.87 },
    Term { a: 18.0, b: 0.81, c: 508.35 },
    Term { a: 17.0, b: 4.20, c: 2118.76 },
    Term { a: 17.0, b: 1.83, c: 526.51 },
    Term { a: 15.0, b: 5.81, c: 1596.19 },
    Term { a: 15.0, b: 0.68, c: 942.06 },
    Term { a: 15.0, b: 4.00, c: 117.32 },
    Term { a: 14.0, b: 5.95, c: 316.39 },
    Term { a: 14.0, b: 1.80, c: 302.16 },
    Term { a: 13.0, b: 2.52, c: 88.87 },
    Term { a: 13.0, b: 4.37, c: 1169.59 },
    Term { a: 11.0, b: 4.44, c: 525.76 },
    Term { a: 10.0, b: 1.72, c: 1581.96 },
    Term { a: 9.0, b: 2.18, c: 1155.36 },
    Term { a: 9.0, b: 3.29, c: 242.73 },
];

const L3: &[Term] = &[
    Term { a: 6502.0, b: 2.5986, c: 7.1135 },
    Term { a: 1357.0, b: 1.3464, c: 529.6910 },
    Term { a: 471.0, b: 2.475, c: 14.227 },
    Term { a: 417.0, b: 3.245, c: 536.805 },
    Term { a: 353.0, b: 2.974, c: 522.577 },
    Term { a: 155.0, b: 2.076, c: 1059.382 },
    Term { a: 87.0, b: 2.51, c: 515.46 },
    Term { a: 44.0, b: 0.0, c: 0.0 },
    Term { a: 34.0, b: 3.83, c: 1066.50 },
    Term { a: 28.0, b: 2.45, c: 206.19 },
    Term { a: 24.0, b: 1.28, c: 412.37 },
    Term { a: 23.0, b: 2.98, c: 543.92 },
    Term { a: 20.0, b: 2.10, c: 639.90 },
    Term { a: 20.0, b: 1.40, c: 419.48 },
    Term { a: 19.0, b: 1.59, c: 103.09 },
    Term { a: 17.0, b: 2.30, c: 21.34 },
    Term { a: 17.0, b: 2.60, c: 1589.07 },
    Term { a: 16.0, b: 3.15, c: 625.67 },
    Term { a: 16.0, b: 3.36, c: 1052.27 },
    Term { a: 13.0, b: 2.76, c: 95.98 },
    Term { a: 13.0, b: 2.54, c: 199.07 },
    Term { a: 13.0, b: 6.27, c: 426.60 },
    Term { a: 9.0, b: 1.76, c: 10.29 },
    Term { a: 9.0, b: 2.27, c: 110.21 },
    Term { a: 7.0, b: 3.43, c: 309.28 },
    Term { a: 7.0, b: 4.04, c: 728.76 },
    Term { a: 6.0, b: 2.52, c: 508.35 },
    Term { a: 5.0, b: 2.91, c: 1045.15 },
    Term { a: 5.0, b: 5.25, c: 323.51 },
    Term { a: 4.0, b: 4.30, c: 88.87 },
    Term { a: 4.0, b: 3.52, c: 302.16 },
    Term { a: 4.0, b: 4.09, c: 735.88 },
    Term { a: 3.0, b: 1.43, c: 956.29 },
    Term { a: 3.0, b: 4.36, c: 1596.19 },
    Term { a: 3.0, b: 1.25, c: 213.30 },
    Term { a: 3.0, b: 5.02, c: 838.97 },
    Term { a: 3.0, b: 2.24, c: 117.32 },
    Term { a: 2.0, b: 2.90, c: 742.99 },
    Term { a: 2.0, b: 2.36, c: 942.06 },
];

const L4: &[Term] = &[
    Term { a: 669.0, b: 0.853, c: 7.114 },
    Term { a: 114.0, b: 3.142, c: 0.0 },
    Term { a: 100.0, b: 0.743, c: 14.227 },
    Term { a: 50.0, b: 1.65, c: 536.80 },
    Term { a: 44.0, b: 5.82, c: 529.69 },
    Term { a: 32.0, b: 4.86, c: 522.58 },
    Term { a: 15.0, b: 4.29, c: 515.46 },
    Term { a: 9.0, b: 0.71, c: 1059.38 },
    Term { a: 5.0, b: 1.30, c: 543.92 },
    Term { a: 4.0, b: 2.32, c: 1066.50 },
    Term { a: 4.0, b: 0.48, c: 21.34 },
    Term { a: 3.0, b: 3.00, c: 412.37 },
    Term { a: 2.0, b: 0.40, c: 639.90 },
    Term { a: 2.0, b: 4.26, c: 199.07 },
    Term { a: 2.0, b: 4.91, c: 625.67 },
    Term { a: 2.0, b: 4.26, c: 206.19 },
    Term { a: 1.0, b: 5.26, c: 1052.27 },
    Term { a: 1.0, b: 4.72, c: 95.98 },
    Term { a: 1.0, b: 1.29, c: 1589.07 },
];

const L5: &[Term] = &[
    Term { a: 50.0, b: 5.26, c: 7.11 },
    Term { a: 16.0, b: 5.25, c: 14.23 },
    Term { a: 4.0, b: 0.01, c: 536.80 },
    Term { a: 2.0, b: 1.10, c: 522.58 },
    Term { a: 1.0, b: 3.14, c: 0.0 },
];

const B0: &[Term] = &[
    Term { a: 2268616.0, b: 3.5585261, c: 529.6909651 },
    Term { a: 110090.0, b: 0.0, c: 0.0 },
    Term { a: 109972.0, b: 3.908093, c: 1059.381930 },
    Term { a: 8101.0, b: 3.6051, c: 522.5774 },
    Term { a: 6438.0, b: 0.3063, c: 536.8045 },
    Term { a: 6044.0, b: 4.2588, c: 1589.0729 },
    Term { a: 1107.0, b: 2.9853, c: 1162.4747 },
    Term { a: 944.0, b: 1.675, c: 426.598 },
    Term { a: 942.0, b: 2.936, c: 1052.268 },
    Term { a: 894.0, b: 1.754, c: 7.114 },
    Term { a: 836.0, b: 5.179, c: 103.093 },
    Term { a: 767.0, b: 2.155, c: 632.784 },
    Term { a: 684.0, b: 3.678, c: 213.299 },
    Term { a: 629.0, b: 0.643, c: 1066.495 },
    Term { a: 559.0, b: 0.014, c: 846.083 },
    Term { a: 532.0, b: 2.703, c: 110.206 },
    Term { a: 464.0, b: 1.173, c: 949.176 },
    Term { a: 431.0, b: 2.608, c: 419.485 },
    Term { a: 351.0, b: 4.611, c: 2118.764 },
    Term { a: 132.0, b: 4.778, c: 742.990 },
    Term { a: 123.0, b: 3.350, c: 1692.166 },
    Term { a: 116.0, b: 1.387, c: 323.505 },
    Term { a: 115.0, b: 5.049, c: 316.392 },
    Term { a: 104.0, b: 3.701, c: 515.464 },
    Term { a: 103.0, b: 2.319, c: 1478.867 },
    Term { a: 102.0, b: 3.153, c: 1581.959 },
];

const B1: &[Term] = &[
    Term { a: 177352.0, b: 5.701665, c: 529.690965 },
    Term { a: 3230.0, b: 5.7794, c: 1059.3819 },
    Term { a: 3081.0, b: 5.4746, c: 522.5774 },
    Term { a: 2212.0, b: 4.7348, c: 536.8045 },
    Term { a: 1694.0, b: 3.1416, c: 0.0 },
    Term { a: 346.0, b: 4.746, c: 1052.268 },
    Term { a: 234.0, b: 5.189, c: 1066.495 },
    Term { a: 196.0, b: 6.186, c: 7.114 },
    Term { a: 150.0, b: 3.927, c: 1589.073 },
    Term { a: 114.0, b: 3.439, c: 632.784 },
    Term { a: 97.0, b: 2.91, c: 949.18 },
    Term { a: 82.0, b: 5.08, c: 1162.47 },
    Term { a: 77.0, b: 2.51, c: 103.09 },
    Term { a: 77.0, b: 0.61, c: 419.48 },
    Term { a: 74.0, b: 5.50, c: 515.46 },
    Term { a: 61.0, b: 5.45, c: 213.30 },
    Term { a: 50.0, b: 3.95, c: 735.88 },
    Term { a: 46.0, b: 0.54, c: 110.21 },
    Term { a: 45.0, b: 1.90, c: 846.08 },
    Term { a: 37.0, b: 4.70, c: 543.92 },
    Term { a: 36.0, b: 6.11, c: 316.39 },
    Term { a: 32.0, b: 4.92, c: 1581.96 },
];

const B2: &[Term] = &[
    Term { a: 8094.0, b: 1.4632, c: 529.6910 },
    Term { a: 813.0, b: 3.1416, c: 0.0 },
    Term { a: 742.0, b: 0.957, c: 522.577 },
    Term { a: 399.0, b: 2.899, c: 536.805 },
    Term { a: 342.0, b: 1.447, c: 1059.382 },
    Term { a: 74.0, b: 0.41, c: 1052.27 },
    Term { a: 46.0, b: 3.48, c: 1066.50 },
    Term { a: 30.0, b: 1.93, c: 1589.07 },
    Term { a: 29.0, b: 0.99, c: 515.46 },
    Term { a: 23.0, b: 4.27, c: 7.11 },
    Term { a: 14.0, b: 2.92, c: 543.92 },
    Term { a: 12.0, b: 5.22, c: 632.78 },
    Term { a: 11.0, b: 4.88, c: 949.18 },
    Term { a: 6.0, b: 6.21, c: 1045.15 },
];

const B3: &[Term] = &[
    Term { a: 252.0, b: 3.381, c: 529.691 },
    Term { a: 122.0, b: 2.733, c: 522.577 },
    Term { a: 49.0, b: 1.04, c: 536.81 },
    Term { a: 11.0, b: 2.31, c: 1059.38 },
    Term { a: 8.0, b: 2.77, c: 515.46 },
    Term { a: 7.0, b: 4.25, c: 1052.27 },
    Term { a: 6.0, b: 1.78, c: 1066.50 },
    Term { a: 4.0, b: 1.13, c: 543.92 },
    Term { a: 3.0, b: 3.14, c: 0.0 },
];

const B4: &[Term] = &[
    Term { a: 15.0, b: 4.53, c: 522.58 },
    Term { a: 5.0, b: 4.47, c: 529.69 },
    Term { a: 4.0, b: 5.44, c: 536.81 },
    Term { a: 3.0, b: 0.0, c: 0.0 },
    Term { a: 2.0, b: 4.52, c: 515.46 },
    Term { a: 1.0, b: 4.20, c: 1052.27 },
];

const B5: &[Term] = &[
    Term { a: 1.0, b: 0.09, c: 522.58 },
];

const R0: &[Term] = &[
    Term { a: 520887429.0, b: 0.0, c: 0.0 },
    Term { a: 25209327.0, b: 3.49108640, c: 529.69096509 },
    Term { a: 610600.0, b: 3.841154, c: 1059.381930 },
    Term { a: 282029.0, b: 2.574199, c: 632.783739 },
    Term { a: 187647.0, b: 2.075904, c: 522.577418 },
    Term { a: 86793.0, b: 0.71001, c: 419.48464 },
    Term { a: 72063.0, b: 0.21466, c: 536.80451 },
    Term { a: 65517.0, b: 5.97996, c: 316.39187 },
    Term { a: 30135.0, b: 2.16132, c: 949.17561 },
    Term { a: 29135.0, b: 1.67759, c: 103.09277 },
    Term { a: 23947.0, b: 0.27458, c: 7.11355 },
    Term { a: 23453.0, b: 3.54023, c: 735.87651 },
    Term { a: 22284.0, b: 4.19363, c: 1589.07290 },
    Term { a: 13033.0, b: 2.96043, c: 1162.47470 },
    Term { a: 12749.0, b: 2.71550, c: 1052.26838 },
    Term { a: 9703.0, b: 1.9067, c: 206.1855 },
    Term { a: 9161.0, b: 4.4135, c: 213.2991 },
    Term { a: 7895.0, b: 2.4791, c: 426.5982 },
    Term { a: 7058.0, b: 2.1818, c: 1265.5675 },
    Term { a: 6138.0, b: 6.2642, c: 846.0828 },
    Term { a: 5477.0, b: 5.6573, c: 639.8973 },
    Term { a: 4170.0, b: 2.0161, c: 515.4639 },
    Term { a: 4137.0, b: 2.7222, c: 625.6702 },
    Term { a: 3503.0, b: 0.5653, c: 1066.4955 },
    Term { a: 2617.0, b: 2.0099, c: 1581.9593 },
    Term { a: 2500.0, b: 4.5518, c: 838.9693 },
    Term { a: 2128.0, b: 6.1275, c: 742.9901 },
    Term { a: 1912.0, b: 0.8562, c: 412.3711 },
    Term { a: 1611.0, b: 3.0887, c: 1368.6603 },
    Term { a: 1479.0, b: 2.6803, c: 1478.8666 },
    Term { a: 1231.0, b: 1.8904, c: 323.5054 },
    Term { a: 1217.0, b: 1.8017, c: 110.2063 },
    Term { a: 1015.0, b: 1.3867, c: 454.9094 },
    Term { a: 999.0, b: 2.872, c: 309.278 },
    Term { a: 961.0, b: 4.549, c: 2118.764 },
    Term { a: 886.0, b: 4.148, c: 533.623 },
    Term { a: 821.0, b: 1.593, c: 1898.351 },
    Term { a: 812.0, b: 5.941, c: 909.819 },
    Term { a: 777.0, b: 3.677, c: 728.763 },
    Term { a: 727.0, b: 3.988, c: 1155.361 },
    Term { a: 655.0, b: 2.791, c: 1685.052 },
    Term { a: 654.0, b: 3.382, c: 1692.166 },
    Term { a: 621.0, b: 4.823, c: 956.289 },
    Term { a: 615.0, b: 2.276, c: 942.062 },
    Term { a: 562.0, b: 0.081, c: 543.918 },
    Term { a: 542.0, b: 0.284, c: 525.759 },
];

const R1: &[Term] = &[
    Term { a: 1271802.0, b: 2.6493751, c: 529.6909651 },
    Term { a: 61662.0, b: 3.00076, c: 1059.38193 },
    Term { a: 53444.0, b: 3.89718, c: 522.57742 },
    Term { a: 41390.0, b: 0.0, c: 0.0 },
    Term { a: 31185.0, b: 4.88277, c: 536.80451 },
    Term { a: 11847.0, b: 2.41330, c: 419.48464 },
    Term { a: 9166.0, b: 4.7598, c: 7.1135 },
    Term { a: 3404.0, b: 3.3469, c: 1589.0729 },
    Term { a: 3203.0, b: 5.2108, c: 735.8765 },
    Term { a: 3176.0, b: 2.7930, c: 103.0928 },
    Term { a: 2806.0, b: 3.7422, c: 515.4639 },
    Term { a: 2677.0, b: 4.3305, c: 1052.2684 },
    Term { a: 2600.0, b: 3.6344, c: 206.1855 },
    Term { a: 2412.0, b: 1.4695, c: 426.5982 },
    Term { a: 2101.0, b: 3.9276, c: 639.8973 },
    Term { a: 1646.0, b: 5.3095, c: 1066.4955 },
    Term { a: 1641.0, b: 4.4163, c: 625.6702 },
    Term { a: 1050.0, b: 3.1611, c: 213.2991 },
    Term { a: 1025.0, b: 2.5543, c: 412.3711 },
    Term { a: 806.0, b: 2.678, c: 632.784 },
    Term { a: 741.0, b: 2.171, c: 1162.475 },
    Term { a: 677.0, b: 6.250, c: 838.969 },
    Term { a: 567.0, b: 4.577, c: 742.990 },
    Term { a: 485.0, b: 2.469, c: 949.176 },
    Term { a: 469.0, b: 4.710, c: 543.918 },
    Term { a: 445.0, b: 0.403, c: 323.505 },
    Term { a: 416.0, b: 5.368, c: 728.763 },
    Term { a: 402.0, b: 4.605, c: 309.278 },
    Term { a: 347.0, b: 4.681, c: 14.227 },
    Term { a: 338.0, b: 3.168, c: 956.289 },
    Term { a: 261.0, b: 5.343, c: 846.083 },
    Term { a: 247.0, b: 3.923, c: 942.062 },
    Term { a: 220.0, b: 4.842, c: 1368.660 },
    Term { a: 203.0, b: 5.600, c: 1155.361 },
    Term { a: 200.0, b: 4.439, c: 1045.155 },
    Term { a: 197.0, b: 3.706, c: 2118.764 },
    Term { a: 196.0, b: 3.759, c: 199.072 },
    Term { a: 184.0, b: 4.265, c: 95.979 },
    Term { a: 180.0, b: 4.402, c: 532.872 },
    Term { a: 170.0, b: 4.846, c: 526.510 },
    Term { a: 146.0, b: 6.130, c: 533.623 },
    Term { a: 133.0, b: 1.322, c: 110.206 },
    Term { a: 132.0, b: 4.512, c: 525.759 },
];

const R2: &[Term] = &[
    Term { a: 79645.0, b: 1.35866, c: 529.69097 },
    Term { a: 8252.0, b: 5.7777, c: 522.5774 },
    Term { a: 7030.0, b: 3.2748, c: 536.8045 },
    Term { a: 5314.0, b: 1.8384, c: 1059.3819 },
    Term { a: 1861.0, b: 2.9768, c: 7.1135 },
    Term { a: 964.0, b: 5.480, c: 515.464 },
    Term { a: 836.0, b: 4.199, c: 419.485 },
    Term { a: 498.0, b: 3.142, c: 0.0 },
    Term { a: 427.0, b: 2.228, c: 639.897 },
    Term { a: 406.0, b: 3.783, c: 1066.495 },
    Term { a: 377.0, b: 2.242, c: 1589.073 },
    Term { a: 363.0, b: 5.368, c: 206.186 },
    Term { a: 342.0, b: 6.099, c: 1052.268 },
    Term { a: 339.0, b: 6.127, c: 625.670 },
    Term { a: 333.0, b: 0.003, c: 426.598 },
    Term { a: 280.0, b: 4.262, c: 412.371 },
    Term { a: 257.0, b: 0.963, c: 632.784 },
    Term { a: 230.0, b: 0.705, c: 735.877 },
    Term { a: 201.0, b: 3.069, c: 543.918 },
    Term { a: 200.0, b: 4.429, c: 103.093 },
    Term { a: 139.0, b: 2.932, c: 14.227 },
    Term { a: 114.0, b: 0.787, c: 728.763 },
    Term { a: 95.0, b: 1.70, c: 838.97 },
    Term { a: 86.0, b: 5.14, c: 323.51 },
    Term { a: 83.0, b: 0.06, c: 309.28 },
    Term { a: 80.0, b: 2.98, c: 742.99 },
    Term { a: 75.0, b: 1.60, c: 956.29 },
    Term { a: 70.0, b: 1.51, c: 213.30 },
    Term { a: 67.0, b: 5.47, c: 199.07 },
    Term { a: 62.0, b: 6.10, c: 1045.15 },
    Term { a: 56.0, b: 0.96, c: 1162.47 },
    Term { a: 52.0, b: 5.58, c: 942.06 },
    Term { a: 50.0, b: 2.72, c: 532.87 },
    Term { a: 45.0, b: 5.52, c: 508.35 },
    Term { a: 44.0, b: 0.27, c: 526.51 },
    Term { a: 40.0, b: 5.95, c: 95.98 },
];

const R3: &[Term] = &[
    Term { a: 3519.0, b: 6.0580, c: 529.6910 },
    Term { a: 1073.0, b: 1.6732, c: 536.8045 },
    Term { a: 916.0, b: 1.413, c: 522.577 },
    Term { a: 342.0, b: 0.523, c: 1059.382 },
    Term { a: 255.0, b: 1.196, c: 7.114 },
    Term { a: 222.0, b: 0.952, c: 515.464 },
    Term { a: 90.0, b: 3.14, c: 0.0 },
    Term { a: 69.0, b: 2.27, c: 1066.50 },
    Term { a: 58.0, b: 1.41, c: 543.92 },
    Term { a: 58.0, b: 0.53, c: 639.90 },
    Term { a: 51.0, b: 5.98, c: 412.37 },
    Term { a: 47.0, b: 1.58, c: 625.67 },
    Term { a: 43.0, b: 6.12, c: 419.48 },
    Term { a: 37.0, b: 1.18, c: 14.23 },
    Term { a: 34.0, b: 1.67, c: 1052.27 },
    Term { a: 34.0, b: 0.85, c: 206.19 },
    Term { a: 31.0, b: 1.04, c: 1589.07 },
    Term { a: 30.0, b: 4.63, c: 426.60 },
    Term { a: 21.0, b: 2.50, c: 728.76 },
    Term { a: 15.0, b: 0.89, c: 199.07 },
    Term { a: 14.0, b: 0.96, c: 508.35 },
    Term { a: 13.0, b: 1.50, c: 1045.15 },
    Term { a: 12.0, b: 2.61, c: 735.88 },
    Term { a: 12.0, b: 3.56, c: 323.51 },
    Term { a: 11.0, b: 1.79, c: 309.28 },
    Term { a: 11.0, b: 6.28, c: 956.29 },
    Term { a: 10.0, b: 6.26, c: 103.09 },
    Term { a: 9.0, b: 3.45, c: 838.97 },
];

const R4: &[Term] = &[
    Term { a: 129.0, b: 0.084, c: 536.805 },
    Term { a: 113.0, b: 4.249, c: 529.691 },
    Term { a: 83.0, b: 3.30, c: 522.58 },
    Term { a: 38.0, b: 2.73, c: 515.46 },
    Term { a: 27.0, b: 5.69, c: 7.11 },
    Term { a: 11.0, b: 5.20, c: 1059.38 },
    Term { a: 9.0, b: 4.20, c: 412.37 },
    Term { a: 8.0, b: 2.84, c: 543.92 },
    Term { a: 8.0, b: 4.27, c: 1066.50 },
    Term { a: 6.0, b: 5.27, c: 639.90 },
];

const R5: &[Term] = &[
    Term { a: 11.0, b: 4.75, c: 536.80 },
    Term { a: 4.0, b: 5.92, c: 522.58 },
    Term { a: 2.0, b: 5.57, c: 515.46 },
    Term { a: 2.0, b: 4.30, c: 543.92 },
    Term { a: 2.0, b: 3.69, c: 7.11 },
    Term { a: 2.0, b: 4.13, c: 1059.38 },
    Term { a: 2.0, b: 5.49, c: 1066.50 },
];
