#![allow(clippy::excessive_precision)]
//! VSOP87D series for Uranus
//!
//! Heliocentric coordinates referred to the mean dynamical ecliptic and equinox of date.
//! Abridged series, 319 terms. Amplitudes are in units of 1e-8 rad (L, B) and 1e-8 AU (R).

use super::{PlanetSeries, Term};

pub const URANUS: PlanetSeries = PlanetSeries {
    longitude: &[L0, L1, L2, L3, L4],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3, R4],
};

const L0: &[Term] = &[
    Term { a: 548129294.0, b: 0.0, c: 0.0 },
    Term { a: 9260408.0, b: 0.8910642, c: 74.7815986 },
    Term { a: 1504248.0, b: 3.6271926, c: 1.4844727 },
    Term { a: 365982.0, b: 1.899622, c: 73.297126 },
    Term { a: 272328.0, b: 3.358237, c: 149.563197 },
    Term { a: 70328.0, b: 5.39254, c: 63.73590 },
    Term { a: 68893.0, b: 6.09292, c: 76.26607 },
    Term { a: 61999.0, b: 2.26952, c: 2.96895 },
    Term { a: 61951.0, b: 2.85099, c: 11.04570 },
    Term { a: 26469.0, b: 3.14152, c: 71.81265 },
    Term { a: 25711.0, b: 6.11380, c: 454.90937 },
    Term { a: 21079.0, b: 4.36059, c: 148.07872 },
    Term { a: 17819.0, b: 1.74437, c: 36.64856 },
    Term { a: 14613.0, b: 4.73732, c: 3.93215 },
    Term { a: 11163.0, b: 5.82682, c: 224.34480 },
    Term { a: 10998.0, b: 0.48865, c: 138.51750 },
    Term { a: 9527.0, b: 3.5865, c: 252.0866 },
];

const L1: &[Term] = &[
    Term { a: 7502543122.0, b: 0.0, c: 0.0 },
    Term { a: 154458.0, b: 5.242017, c: 74.781599 },
    Term { a: 24456.0, b: 1.71256, c: 1.48447 },
    Term { a: 9258.0, b: 0.4284, c: 11.0457 },
    Term { a: 8266.0, b: 1.5022, c: 63.7359 },
    Term { a: 7842.0, b: 1.3198, c: 149.5632 },
    Term { a: 3899.0, b: 0.4648, c: 3.9322 },
    Term { a: 2284.0, b: 4.1737, c: 76.2661 },
    Term { a: 1927.0, b: 0.5301, c: 2.9689 },
    Term { a: 1233.0, b: 1.5863, c: 70.8494 },
    Term { a: 791.0, b: 5.436, c: 3.181 },
    Term { a: 767.0, b: 1.996, c: 73.297 },
    Term { a: 482.0, b: 2.984, c: 85.827 },
    Term { a: 450.0, b: 4.138, c: 138.517 },
    Term { a: 446.0, b: 3.723, c: 224.345 },
    Term { a: 427.0, b: 4.731, c: 71.813 },
    Term { a: 354.0, b: 2.583, c: 148.079 },
    Term { a: 348.0, b: 2.454, c: 9.561 },
    Term { a: 317.0, b: 5.579, c: 52.690 },
    Term { a: 206.0, b: 2.363, c: 2.448 },
    Term { a: 189.0, b: 4.202, c: 56.622 },
    Term { a: 184.0, b: 0.284, c: 151.048 },
    Term { a: 180.0, b: 5.684, c: 12.530 },
    Term { a: 171.0, b: 3.001, c: 78.714 },
    Term { a: 158.0, b: 2.909, c: 0.963 },
    Term { a: 155.0, b: 5.591, c: 4.453 },
    Term { a: 154.0, b: 4.652, c: 35.165 },
    Term { a: 152.0, b: 2.942, c: 77.751 },
    Term { a: 143.0, b: 2.590, c: 62.251 },
    Term { a: 121.0, b: 4.148, c: 127.472 },
    Term { a: 116.0, b: 3.732, c: 65.220 },
    Term { a: 102.0, b: 4.188, c: 145.631 },
    Term { a: 102.0, b: 6.034, c: 0.112 },
    Term { a: 88.0, b: 3.99, c: 18.16 },
    Term { a: 88.0, b: 6.16, c: 202.25 },
    Term { a: 81.0, b: 2.64, c: 22.09 },
    Term { a: 72.0, b: 6.05, c: 70.33 },
    Term { a: 69.0, b: 4.05, c: 77.96 },
    Term { a: 59.0, b: 3.70, c: 67.67 },
    Term { a: 47.0, b: 3.54, c: 351.82 },
    Term { a: 44.0, b: 5.91, c: 7.11 },
    Term { a: 43.0, b: 5.72, c: 5.42 },
    Term { a: 39.0, b: 4.92, c: 222.86 },
    Term { a: 36.0, b: 5.90, c: 33.68 },
    Term { a: 36.0, b: 3.29, c: 8.08 },
    Term { a: 36.0, b: 3.33, c: 71.60 },
    Term { a: 35.0, b: 5.08, c: 38.13 },
    Term { a: 31.0, b: 5.62, c: 984.60 },
    Term { a: 31.0, b: 5.50, c: 59.80 },
    Term { a: 31.0, b: 5.46, c: 160.61 },
    Term { a: 30.0, b: 1.66, c: 447.80 },
    Term { a: 29.0, b: 1.15, c: 462.02 },
    Term { a: 29.0, b: 4.52, c: 84.34 },
    Term { a: 27.0, b: 5.54, c: 131.40 },
    Term { a: 27.0, b: 6.15, c: 299.13 },
    Term { a: 26.0, b: 4.99, c: 137.03 },
    Term { a: 25.0, b: 5.74, c: 380.13 },
];

const L2: &[Term] = &[
    Term { a: 53033.0, b: 0.0, c: 0.0 },
    Term { a: 2358.0, b: 2.2601, c: 74.7816 },
    Term { a: 769.0, b: 4.526, c: 11.046 },
    Term { a: 552.0, b: 3.258, c: 63.736 },
    Term { a: 542.0, b: 2.276, c: 3.932 },
    Term { a: 529.0, b: 4.923, c: 1.484 },
    Term { a: 258.0, b: 3.691, c: 3.181 },
    Term { a: 239.0, b: 5.858, c: 149.563 },
    Term { a: 182.0, b: 6.218, c: 70.849 },
    Term { a: 54.0, b: 1.44, c: 76.27 },
    Term { a: 49.0, b: 6.03, c: 56.62 },
    Term { a: 45.0, b: 3.91, c: 2.45 },
    Term { a: 45.0, b: 0.81, c: 85.83 },
    Term { a: 38.0, b: 1.78, c: 52.69 },
    Term { a: 37.0, b: 4.46, c: 2.97 },
    Term { a: 33.0, b: 0.86, c: 9.56 },
    Term { a: 29.0, b: 5.10, c: 73.30 },
    Term { a: 24.0, b: 2.11, c: 18.16 },
    Term { a: 22.0, b: 5.99, c: 138.52 },
    Term { a: 22.0, b: 4.82, c: 78.71 },
    Term { a: 21.0, b: 2.40, c: 77.96 },
    Term { a: 21.0, b: 2.17, c: 224.34 },
    Term { a: 17.0, b: 2.54, c: 145.63 },
    Term { a: 17.0, b: 3.47, c: 12.53 },
    Term { a: 12.0, b: 0.02, c: 22.09 },
    Term { a: 11.0, b: 0.08, c: 127.47 },
    Term { a: 10.0, b: 5.16, c: 71.60 },
    Term { a: 10.0, b: 4.46, c: 62.25 },
    Term { a: 9.0, b: 4.26, c: 7.11 },
    Term { a: 8.0, b: 5.50, c: 67.67 },
    Term { a: 7.0, b: 1.25, c: 5.42 },
    Term { a: 6.0, b: 3.36, c: 447.80 },
    Term { a: 6.0, b: 5.45, c: 65.22 },
    Term { a: 6.0, b: 4.52, c: 151.05 },
    Term { a: 6.0, b: 5.73, c: 462.02 },
];

const L3: &[Term] = &[
    Term { a: 121.0, b: 0.024, c: 74.782 },
    Term { a: 68.0, b: 4.12, c: 3.93 },
    Term { a: 53.0, b: 2.39, c: 11.05 },
    Term { a: 46.0, b: 0.0, c: 0.0 },
    Term { a: 45.0, b: 2.04, c: 3.18 },
    Term { a: 44.0, b: 2.96, c: 1.48 },
    Term { a: 25.0, b: 4.89, c: 63.74 },
    Term { a: 21.0, b: 4.55, c: 70.85 },
    Term { a: 20.0, b: 2.31, c: 149.56 },
    Term { a: 9.0, b: 1.58, c: 56.62 },
    Term { a: 4.0, b: 0.23, c: 18.16 },
    Term { a: 4.0, b: 5.39, c: 76.27 },
    Term { a: 4.0, b: 0.95, c: 77.96 },
    Term { a: 3.0, b: 4.98, c: 85.83 },
    Term { a: 3.0, b: 4.13, c: 52.69 },
    Term { a: 3.0, b: 0.37, c: 78.71 },
    Term { a: 2.0, b: 0.86, c: 145.63 },
    Term { a: 2.0, b: 5.66, c: 9.56 },
];

const L4: &[Term] = &[
    Term { a: 114.0, b: 3.142, c: 0.0 },
    Term { a: 6.0, b: 4.58, c: 74.78 },
    Term { a: 3.0, b: 0.35, c: 11.05 },
    Term { a: 1.0, b: 3.42, c: 56.62 },
];

const B0: &[Term] = &[
    Term { a: 1346278.0, b: 2.6187781, c: 74.7815986 },
    Term { a: 62341.0, b: 5.08111, c: 149.56320 },
    Term { a: 61601.0, b: 3.14159, c: 0.0 },
    Term { a: 9964.0, b: 1.6160, c: 76.2661 },
    Term { a: 9926.0, b: 0.5763, c: 73.2971 },
    Term { a: 3259.0, b: 1.2612, c: 224.3448 },
    Term { a: 2972.0, b: 2.2437, c: 1.4845 },
    Term { a: 2010.0, b: 6.0555, c: 148.0787 },
    Term { a: 1522.0, b: 0.2796, c: 63.7359 },
    Term { a: 924.0, b: 4.038, c: 151.048 },
    Term { a: 761.0, b: 6.140, c: 71.813 },
    Term { a: 522.0, b: 3.321, c: 138.517 },
    Term { a: 463.0, b: 0.743, c: 85.827 },
    Term { a: 437.0, b: 3.381, c: 529.691 },
    Term { a: 435.0, b: 0.341, c: 77.751 },
    Term { a: 431.0, b: 3.554, c: 213.299 },
    Term { a: 420.0, b: 5.213, c: 11.046 },
    Term { a: 245.0, b: 0.788, c: 2.969 },
    Term { a: 233.0, b: 2.257, c: 222.860 },
    Term { a: 216.0, b: 1.591, c: 38.133 },
    Term { a: 180.0, b: 3.725, c: 299.126 },
    Term { a: 175.0, b: 1.236, c: 146.594 },
    Term { a: 174.0, b: 1.937, c: 380.128 },
    Term { a: 160.0, b: 5.336, c: 111.430 },
    Term { a: 144.0, b: 5.962, c: 35.165 },
    Term { a: 116.0, b: 5.739, c: 70.849 },
    Term { a: 106.0, b: 0.941, c: 70.328 },
    Term { a: 102.0, b: 2.619, c: 78.714 },
];

const B1: &[Term] = &[
    Term { a: 206366.0, b: 4.123943, c: 74.781599 },
    Term { a: 8563.0, b: 0.3382, c: 149.5632 },
    Term { a: 1726.0, b: 2.1219, c: 73.2971 },
    Term { a: 1374.0, b: 0.0, c: 0.0 },
    Term { a: 1369.0, b: 3.0686, c: 76.2661 },
    Term { a: 451.0, b: 3.777, c: 1.484 },
    Term { a: 400.0, b: 2.848, c: 224.345 },
    Term { a: 307.0, b: 1.255, c: 148.079 },
    Term { a: 154.0, b: 3.786, c: 63.736 },
    Term { a: 112.0, b: 5.573, c: 151.048 },
    Term { a: 111.0, b: 5.329, c: 138.517 },
    Term { a: 83.0, b: 3.59, c: 71.81 },
    Term { a: 56.0, b: 3.40, c: 85.83 },
    Term { a: 54.0, b: 1.70, c: 77.75 },
    Term { a: 42.0, b: 1.21, c: 11.05 },
    Term { a: 41.0, b: 4.45, c: 78.71 },
    Term { a: 32.0, b: 3.77, c: 222.86 },
    Term { a: 30.0, b: 2.56, c: 2.97 },
    Term { a: 27.0, b: 5.34, c: 213.30 },
    Term { a: 26.0, b: 0.42, c: 380.13 },
];

const B2: &[Term] = &[
    Term { a: 9212.0, b: 5.8004, c: 74.7816 },
    Term { a: 557.0, b: 0.0, c: 0.0 },
    Term { a: 286.0, b: 2.177, c: 149.563 },
    Term { a: 95.0, b: 3.84, c: 73.30 },
    Term { a: 45.0, b: 4.88, c: 76.27 },
    Term { a: 20.0, b: 5.46, c: 1.48 },
    Term { a: 15.0, b: 0.88, c: 138.52 },
    Term { a: 14.0, b: 2.85, c: 148.08 },
    Term { a: 14.0, b: 5.07, c: 63.74 },
    Term { a: 10.0, b: 5.00, c: 224.34 },
    Term { a: 8.0, b: 6.27, c: 78.71 },
];

const B3: &[Term] = &[
    Term { a: 268.0, b: 1.251, c: 74.782 },
    Term { a: 11.0, b: 3.14, c: 0.0 },
    Term { a: 6.0, b: 4.01, c: 149.56 },
    Term { a: 3.0, b: 5.78, c: 73.30 },
];

const B4: &[Term] = &[
    Term { a: 6.0, b: 2.85, c: 74.78 },
];

const R0: &[Term] = &[
    Term { a: 1921264848.0, b: 0.0, c: 0.0 },
    Term { a: 88784984.0, b: 5.60377527, c: 74.78159857 },
    Term { a: 3440836.0, b: 0.3283610, c: 73.2971259 },
    Term { a: 2055653.0, b: 1.7829517, c: 149.5631971 },
    Term { a: 649322.0, b: 4.522473, c: 76.266071 },
    Term { a: 602248.0, b: 3.860038, c: 63.735898 },
    Term { a: 496404.0, b: 1.401399, c: 454.909367 },
    Term { a: 338526.0, b: 1.580027, c: 138.517497 },
    Term { a: 243508.0, b: 1.570866, c: 71.812653 },
    Term { a: 190522.0, b: 1.998094, c: 1.484473 },
    Term { a: 161858.0, b: 2.791379, c: 148.078724 },
    Term { a: 143706.0, b: 1.383686, c: 11.045700 },
    Term { a: 93192.0, b: 0.17437, c: 36.64856 },
    Term { a: 89806.0, b: 3.66105, c: 109.94569 },
    Term { a: 71424.0, b: 4.24509, c: 224.34480 },
    Term { a: 46677.0, b: 1.39977, c: 35.16409 },
    Term { a: 39026.0, b: 3.36235, c: 277.03499 },
    Term { a: 39010.0, b: 1.66971, c: 70.84945 },
    Term { a: 36755.0, b: 3.88649, c: 146.59425 },
    Term { a: 30349.0, b: 0.70100, c: 151.04767 },
    Term { a: 29156.0, b: 3.18056, c: 77.75054 },
    Term { a: 25786.0, b: 3.78538, c: 85.82730 },
    Term { a: 25620.0, b: 5.25656, c: 380.12777 },
    Term { a: 22637.0, b: 0.72519, c: 529.69097 },
    Term { a: 20473.0, b: 2.79640, c: 70.32818 },
    Term { a: 20472.0, b: 1.55589, c: 202.25340 },
    Term { a: 17901.0, b: 0.55455, c: 2.96895 },
    Term { a: 15503.0, b: 5.35405, c: 38.13304 },
    Term { a: 14702.0, b: 4.90434, c: 108.46122 },
    Term { a: 12897.0, b: 2.62154, c: 111.43016 },
    Term { a: 12328.0, b: 5.96039, c: 127.47180 },
    Term { a: 11959.0, b: 1.75044, c: 984.60033 },
    Term { a: 11853.0, b: 0.99343, c: 52.69020 },
    Term { a: 11696.0, b: 3.29826, c: 3.93215 },
    Term { a: 11495.0, b: 0.43774, c: 65.22037 },
    Term { a: 10793.0, b: 1.42105, c: 213.29910 },
    Term { a: 9111.0, b: 4.9964, c: 62.2514 },
    Term { a: 8421.0, b: 5.2535, c: 222.8603 },
    Term { a: 8402.0, b: 5.0388, c: 415.5525 },
    Term { a: 7449.0, b: 0.7949, c: 351.8166 },
    Term { a: 7329.0, b: 3.9728, c: 183.2428 },
    Term { a: 6046.0, b: 5.6796, c: 78.7138 },
    Term { a: 5524.0, b: 3.1150, c: 9.5612 },
    Term { a: 5445.0, b: 5.1058, c: 145.1098 },
    Term { a: 5238.0, b: 2.6296, c: 33.6796 },
    Term { a: 4079.0, b: 3.2206, c: 340.7709 },
    Term { a: 3919.0, b: 4.2502, c: 39.6175 },
    Term { a: 3802.0, b: 6.1099, c: 184.7273 },
    Term { a: 3781.0, b: 3.4584, c: 456.3938 },
    Term { a: 3687.0, b: 2.4872, c: 453.4249 },
    Term { a: 3102.0, b: 4.1403, c: 219.8914 },
    Term { a: 2963.0, b: 0.8298, c: 56.6224 },
    Term { a: 2942.0, b: 0.4239, c: 299.1264 },
    Term { a: 2940.0, b: 2.1464, c: 137.0330 },
    Term { a: 2938.0, b: 3.6766, c: 140.0020 },
    Term { a: 2865.0, b: 0.3100, c: 12.5302 },
    Term { a: 2538.0, b: 4.8546, c: 131.4039 },
    Term { a: 2364.0, b: 0.4425, c: 554.0700 },
    Term { a: 2183.0, b: 2.9404, c: 305.3462 },
];

const R1: &[Term] = &[
    Term { a: 1479896.0, b: 3.6720571, c: 74.7815986 },
    Term { a: 71212.0, b: 6.22601, c: 63.73590 },
    Term { a: 68627.0, b: 6.13411, c: 149.56320 },
    Term { a: 24060.0, b: 3.14159, c: 0.0 },
    Term { a: 21468.0, b: 2.60177, c: 76.26607 },
    Term { a: 20857.0, b: 5.24625, c: 11.04570 },
    Term { a: 11405.0, b: 0.01848, c: 70.84945 },
    Term { a: 7497.0, b: 0.4236, c: 73.2971 },
    Term { a: 4244.0, b: 1.4169, c: 85.8273 },
    Term { a: 3927.0, b: 3.1551, c: 71.8127 },
    Term { a: 3578.0, b: 2.3116, c: 224.3448 },
    Term { a: 3506.0, b: 2.5835, c: 138.5175 },
    Term { a: 3229.0, b: 5.2550, c: 3.9322 },
    Term { a: 3060.0, b: 0.1532, c: 1.4845 },
    Term { a: 2564.0, b: 0.9808, c: 148.0787 },
    Term { a: 2429.0, b: 3.9944, c: 52.6902 },
    Term { a: 1645.0, b: 2.6535, c: 127.4718 },
    Term { a: 1584.0, b: 1.4305, c: 78.7138 },
    Term { a: 1508.0, b: 5.0600, c: 151.0477 },
    Term { a: 1490.0, b: 2.6756, c: 56.6224 },
    Term { a: 1413.0, b: 4.5746, c: 202.2534 },
    Term { a: 1403.0, b: 1.3699, c: 77.7505 },
    Term { a: 1228.0, b: 1.0470, c: 62.2514 },
    Term { a: 1033.0, b: 0.2646, c: 131.4039 },
    Term { a: 992.0, b: 2.172, c: 65.220 },
    Term { a: 862.0, b: 5.055, c: 351.817 },
    Term { a: 744.0, b: 3.076, c: 35.165 },
    Term { a: 687.0, b: 2.499, c: 77.963 },
    Term { a: 647.0, b: 4.473, c: 70.328 },
    Term { a: 624.0, b: 0.863, c: 9.561 },
    Term { a: 604.0, b: 0.907, c: 984.600 },
    Term { a: 575.0, b: 3.231, c: 447.796 },
    Term { a: 562.0, b: 2.718, c: 462.023 },
    Term { a: 530.0, b: 5.917, c: 213.299 },
    Term { a: 528.0, b: 5.151, c: 2.969 },
];

const R2: &[Term] = &[
    Term { a: 22440.0, b: 0.69953, c: 74.78160 },
    Term { a: 4727.0, b: 1.6990, c: 63.7359 },
    Term { a: 1682.0, b: 4.6483, c: 70.8494 },
    Term { a: 1650.0, b: 3.0966, c: 11.0457 },
    Term { a: 1434.0, b: 3.5212, c: 149.5632 },
    Term { a: 770.0, b: 0.0, c: 0.0 },
    Term { a: 500.0, b: 6.172, c: 76.266 },
    Term { a: 461.0, b: 0.767, c: 3.932 },
    Term { a: 390.0, b: 4.496, c: 56.622 },
    Term { a: 390.0, b: 5.527, c: 85.827 },
    Term { a: 292.0, b: 0.204, c: 52.690 },
    Term { a: 287.0, b: 3.534, c: 73.297 },
    Term { a: 273.0, b: 3.847, c: 138.517 },
    Term { a: 220.0, b: 1.964, c: 131.404 },
    Term { a: 216.0, b: 0.848, c: 77.963 },
    Term { a: 205.0, b: 3.248, c: 78.714 },
    Term { a: 149.0, b: 4.898, c: 127.472 },
    Term { a: 129.0, b: 2.081, c: 3.181 },
];

const R3: &[Term] = &[
    Term { a: 1164.0, b: 4.7345, c: 74.7816 },
    Term { a: 212.0, b: 3.343, c: 63.736 },
    Term { a: 196.0, b: 2.980, c: 70.849 },
    Term { a: 105.0, b: 0.958, c: 11.046 },
    Term { a: 73.0, b: 1.00, c: 149.56 },
    Term { a: 72.0, b: 0.03, c: 56.62 },
    Term { a: 55.0, b: 2.59, c: 3.93 },
    Term { a: 36.0, b: 5.65, c: 77.96 },
    Term { a: 34.0, b: 3.82, c: 76.27 },
    Term { a: 32.0, b: 3.60, c: 131.40 },
];

const R4: &[Term] = &[
    Term { a: 53.0, b: 3.01, c: 74.78 },
    Term { a: 10.0, b: 1.91, c: 56.62 },
];
