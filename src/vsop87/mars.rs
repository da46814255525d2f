#![allow(clippy::excessive_precision)]
//! VSOP87D series for Mars
//!
//! Heliocentric coordinates referred to the mean dynamical ecliptic and equinox of date.
//! Abridged series, 285 terms. Amplitudes are in units of 1e-8 rad (L, B) and 1e-8 AU (R).

use super::{PlanetSeries, Term};

pub const MARS: PlanetSeries = PlanetSeries {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3, R4],
};

const L0: &[Term] = &[
    Term { a: 620347712.0, b: 0.0, c: 0.0 },
    Term { a: 18656368.0, b: 5.05037100, c: 3340.61242670 },
    Term { a: 1108217.0, b: 5.4009984, c: 6681.2248534 },
    Term { a: 91798.0, b: 5.75479, c: 10021.83728 },
    Term { a: 27745.0, b: 5.97050, c: 3.52312 },
    Term { a: 12316.0, b: 0.84956, c: 2810.92146 },
    Term { a: 10610.0, b: 2.93959, c: 2281.23050 },
    Term { a: 8927.0, b: 4.1570, c: 0.0173 },
    Term { a: 8716.0, b: 6.1101, c: 13362.4497 },
    Term { a: 7775.0, b: 3.3397, c: 5621.8429 },
    Term { a: 6798.0, b: 0.3646, c: 398.1490 },
    Term { a: 4161.0, b: 0.2281, c: 2942.4634 },
    Term { a: 3575.0, b: 1.6619, c: 2544.3144 },
    Term { a: 3075.0, b: 0.8570, c: 191.4483 },
    Term { a: 2938.0, b: 6.0789, c: 0.0673 },
    Term { a: 2628.0, b: 0.6481, c: 3337.0893 },
    Term { a: 2580.0, b: 0.0300, c: 3344.1355 },
    Term { a: 2389.0, b: 5.0390, c: 796.2980 },
    Term { a: 1799.0, b: 0.6563, c: 529.6910 },
    Term { a: 1546.0, b: 2.9158, c: 1751.5395 },
    Term { a: 1528.0, b: 1.1498, c: 6151.5339 },
    Term { a: 1286.0, b: 3.0680, c: 2146.1654 },
    Term { a: 1264.0, b: 3.6228, c: 5092.1520 },
    Term { a: 1025.0, b: 3.6933, c: 8962.4553 },
    Term { a: 892.0, b: 0.183, c: 16703.062 },
    Term { a: 859.0, b: 2.401, c: 2914.014 },
    Term { a: 833.0, b: 4.495, c: 3340.630 },
    Term { a: 833.0, b: 2.464, c: 3340.595 },
    Term { a: 749.0, b: 3.822, c: 155.420 },
    Term { a: 724.0, b: 0.675, c: 3738.761 },
    Term { a: 713.0, b: 3.663, c: 1059.382 },
    Term { a: 655.0, b: 0.489, c: 3127.313 },
    Term { a: 636.0, b: 2.922, c: 8432.764 },
    Term { a: 553.0, b: 4.475, c: 1748.016 },
    Term { a: 550.0, b: 3.810, c: 0.980 },
    Term { a: 472.0, b: 3.625, c: 1194.447 },
    Term { a: 426.0, b: 0.554, c: 6283.076 },
    Term { a: 415.0, b: 0.497, c: 213.299 },
    Term { a: 312.0, b: 0.999, c: 6677.702 },
    Term { a: 307.0, b: 0.381, c: 6684.748 },
    Term { a: 302.0, b: 4.486, c: 3532.061 },
    Term { a: 299.0, b: 2.783, c: 6254.627 },
    Term { a: 293.0, b: 4.221, c: 20.775 },
    Term { a: 284.0, b: 5.769, c: 3149.164 },
    Term { a: 281.0, b: 5.882, c: 1349.867 },
    Term { a: 274.0, b: 0.542, c: 3340.545 },
    Term { a: 274.0, b: 0.134, c: 3340.680 },
    Term { a: 239.0, b: 5.372, c: 4136.910 },
    Term { a: 236.0, b: 5.755, c: 3333.499 },
    Term { a: 231.0, b: 1.282, c: 3870.303 },
    Term { a: 221.0, b: 3.505, c: 382.897 },
    Term { a: 204.0, b: 2.821, c: 1221.849 },
    Term { a: 193.0, b: 3.357, c: 3.590 },
    Term { a: 189.0, b: 1.491, c: 9492.146 },
    Term { a: 179.0, b: 1.006, c: 951.718 },
    Term { a: 174.0, b: 2.414, c: 553.569 },
    Term { a: 172.0, b: 0.439, c: 5486.778 },
    Term { a: 160.0, b: 3.949, c: 4562.461 },
    Term { a: 144.0, b: 1.419, c: 135.065 },
    Term { a: 140.0, b: 3.326, c: 2700.715 },
    Term { a: 138.0, b: 4.301, c: 7.114 },
    Term { a: 131.0, b: 4.045, c: 12303.068 },
    Term { a: 128.0, b: 2.208, c: 1592.596 },
    Term { a: 128.0, b: 1.807, c: 5088.629 },
    Term { a: 117.0, b: 3.128, c: 7903.073 },
    Term { a: 113.0, b: 3.701, c: 1589.073 },
    Term { a: 110.0, b: 1.052, c: 242.729 },
    Term { a: 105.0, b: 0.785, c: 8827.390 },
    Term { a: 100.0, b: 3.243, c: 11773.377 },
];

const L1: &[Term] = &[
    Term { a: 334085627474.0, b: 0.0, c: 0.0 },
    Term { a: 1458227.0, b: 3.6042605, c: 3340.6124267 },
    Term { a: 164901.0, b: 3.926313, c: 6681.224853 },
    Term { a: 19963.0, b: 4.26594, c: 10021.83728 },
    Term { a: 3452.0, b: 4.7321, c: 3.5231 },
    Term { a: 2485.0, b: 4.6128, c: 13362.4497 },
    Term { a: 842.0, b: 4.459, c: 2281.230 },
    Term { a: 538.0, b: 5.016, c: 398.149 },
    Term { a: 521.0, b: 4.994, c: 3344.136 },
    Term { a: 433.0, b: 2.561, c: 191.448 },
    Term { a: 430.0, b: 5.316, c: 155.420 },
    Term { a: 382.0, b: 3.539, c: 796.298 },
    Term { a: 314.0, b: 4.963, c: 16703.062 },
    Term { a: 283.0, b: 3.160, c: 2544.314 },
    Term { a: 206.0, b: 4.569, c: 2146.165 },
    Term { a: 169.0, b: 1.329, c: 3337.089 },
    Term { a: 158.0, b: 4.185, c: 1751.540 },
    Term { a: 134.0, b: 2.233, c: 0.980 },
    Term { a: 134.0, b: 5.974, c: 1748.016 },
    Term { a: 118.0, b: 6.024, c: 6151.534 },
    Term { a: 117.0, b: 2.213, c: 1059.382 },
    Term { a: 114.0, b: 2.129, c: 1194.447 },
    Term { a: 114.0, b: 5.428, c: 3738.761 },
    Term { a: 91.0, b: 1.10, c: 1349.87 },
    Term { a: 85.0, b: 3.91, c: 553.57 },
    Term { a: 83.0, b: 5.30, c: 6684.75 },
    Term { a: 81.0, b: 4.43, c: 529.69 },
    Term { a: 80.0, b: 2.25, c: 8962.46 },
    Term { a: 72.0, b: 5.34, c: 6677.70 },
];

const L2: &[Term] = &[
    Term { a: 58016.0, b: 2.04979, c: 3340.61243 },
    Term { a: 54188.0, b: 0.0, c: 0.0 },
    Term { a: 13908.0, b: 2.45742, c: 6681.22485 },
    Term { a: 2465.0, b: 2.8000, c: 10021.8373 },
    Term { a: 398.0, b: 3.141, c: 13362.450 },
    Term { a: 222.0, b: 3.194, c: 3.523 },
    Term { a: 121.0, b: 0.543, c: 155.420 },
    Term { a: 62.0, b: 3.49, c: 16703.06 },
    Term { a: 54.0, b: 3.54, c: 3344.14 },
    Term { a: 34.0, b: 6.00, c: 2281.23 },
    Term { a: 32.0, b: 4.14, c: 191.45 },
    Term { a: 30.0, b: 2.00, c: 796.30 },
    Term { a: 23.0, b: 4.33, c: 242.73 },
    Term { a: 22.0, b: 3.45, c: 398.15 },
    Term { a: 20.0, b: 5.42, c: 553.57 },
    Term { a: 16.0, b: 0.66, c: 0.98 },
    Term { a: 16.0, b: 6.11, c: 2146.17 },
    Term { a: 16.0, b: 1.22, c: 1748.02 },
    Term { a: 15.0, b: 6.10, c: 3185.19 },
    Term { a: 14.0, b: 4.02, c: 951.72 },
    Term { a: 14.0, b: 2.62, c: 1349.87 },
    Term { a: 13.0, b: 0.60, c: 1194.45 },
    Term { a: 12.0, b: 3.86, c: 6684.75 },
    Term { a: 11.0, b: 4.72, c: 2544.31 },
    Term { a: 10.0, b: 0.25, c: 382.90 },
    Term { a: 9.0, b: 0.68, c: 1059.38 },
    Term { a: 9.0, b: 3.83, c: 20043.67 },
    Term { a: 9.0, b: 3.88, c: 3738.76 },
    Term { a: 8.0, b: 5.46, c: 1751.54 },
    Term { a: 7.0, b: 2.58, c: 3149.16 },
    Term { a: 7.0, b: 2.38, c: 4136.91 },
    Term { a: 6.0, b: 5.48, c: 1592.60 },
    Term { a: 6.0, b: 2.34, c: 3097.88 },
];

const L3: &[Term] = &[
    Term { a: 1482.0, b: 0.4443, c: 3340.6124 },
    Term { a: 662.0, b: 0.885, c: 6681.225 },
    Term { a: 188.0, b: 1.288, c: 10021.837 },
    Term { a: 41.0, b: 1.65, c: 13362.45 },
    Term { a: 26.0, b: 0.0, c: 0.0 },
    Term { a: 23.0, b: 2.05, c: 155.42 },
    Term { a: 10.0, b: 1.58, c: 3.52 },
    Term { a: 8.0, b: 2.00, c: 16703.06 },
    Term { a: 5.0, b: 2.82, c: 242.73 },
    Term { a: 4.0, b: 2.02, c: 3344.14 },
    Term { a: 3.0, b: 4.59, c: 3185.19 },
    Term { a: 3.0, b: 0.65, c: 553.57 },
];

const L4: &[Term] = &[
    Term { a: 114.0, b: 3.1416, c: 0.0 },
    Term { a: 29.0, b: 5.64, c: 6681.22 },
    Term { a: 24.0, b: 5.14, c: 3340.61 },
    Term { a: 11.0, b: 6.03, c: 10021.84 },
    Term { a: 3.0, b: 0.13, c: 13362.45 },
    Term { a: 3.0, b: 3.56, c: 155.42 },
    Term { a: 1.0, b: 0.49, c: 16703.06 },
    Term { a: 1.0, b: 1.32, c: 242.73 },
];

const L5: &[Term] = &[
    Term { a: 1.0, b: 3.14, c: 0.0 },
    Term { a: 1.0, b: 4.04, c: 6681.22 },
];

const B0: &[Term] = &[
    Term { a: 3197135.0, b: 3.7683204, c: 3340.6124267 },
    Term { a: 298033.0, b: 4.106170, c: 6681.224853 },
    Term { a: 289105.0, b: 0.0, c: 0.0 },
    Term { a: 31366.0, b: 4.44651, c: 10021.83728 },
    Term { a: 3484.0, b: 4.7881, c: 13362.4497 },
    Term { a: 443.0, b: 5.026, c: 3344.136 },
    Term { a: 443.0, b: 5.652, c: 3337.089 },
    Term { a: 399.0, b: 5.131, c: 16703.062 },
    Term { a: 293.0, b: 3.793, c: 2281.230 },
    Term { a: 182.0, b: 6.136, c: 6151.534 },
    Term { a: 163.0, b: 4.264, c: 529.691 },
    Term { a: 160.0, b: 2.232, c: 1059.382 },
    Term { a: 149.0, b: 2.165, c: 5621.843 },
    Term { a: 143.0, b: 1.182, c: 3340.595 },
    Term { a: 143.0, b: 3.213, c: 3340.630 },
    Term { a: 139.0, b: 2.418, c: 8962.455 },
];

const B1: &[Term] = &[
    Term { a: 350069.0, b: 5.368478, c: 3340.612427 },
    Term { a: 14116.0, b: 3.14159, c: 0.0 },
    Term { a: 9671.0, b: 5.4788, c: 6681.2249 },
    Term { a: 1472.0, b: 3.2021, c: 10021.8373 },
    Term { a: 426.0, b: 3.408, c: 13362.450 },
    Term { a: 102.0, b: 0.776, c: 3337.089 },
    Term { a: 79.0, b: 3.72, c: 16703.06 },
    Term { a: 33.0, b: 3.46, c: 5621.84 },
    Term { a: 26.0, b: 2.48, c: 2281.23 },
];

const B2: &[Term] = &[
    Term { a: 16727.0, b: 0.60221, c: 3340.61243 },
    Term { a: 4987.0, b: 3.1416, c: 0.0 },
    Term { a: 302.0, b: 5.559, c: 6681.225 },
    Term { a: 26.0, b: 1.90, c: 13362.45 },
    Term { a: 21.0, b: 0.92, c: 10021.84 },
    Term { a: 12.0, b: 2.24, c: 3340.63 },
    Term { a: 8.0, b: 2.25, c: 16703.06 },
];

const B3: &[Term] = &[
    Term { a: 607.0, b: 1.981, c: 3340.612 },
    Term { a: 43.0, b: 0.0, c: 0.0 },
    Term { a: 14.0, b: 1.80, c: 6681.22 },
    Term { a: 3.0, b: 3.45, c: 10021.84 },
];

const B4: &[Term] = &[
    Term { a: 13.0, b: 0.0, c: 0.0 },
    Term { a: 11.0, b: 3.46, c: 3340.61 },
    Term { a: 1.0, b: 0.50, c: 6681.22 },
];

const R0: &[Term] = &[
    Term { a: 153033488.0, b: 0.0, c: 0.0 },
    Term { a: 14184953.0, b: 3.47971284, c: 3340.6124267 },
    Term { a: 660776.0, b: 3.817834, c: 6681.224853 },
    Term { a: 46179.0, b: 4.15595, c: 10021.83728 },
    Term { a: 8110.0, b: 5.5596, c: 2810.9215 },
    Term { a: 7485.0, b: 1.7724, c: 5621.8429 },
    Term { a: 5523.0, b: 1.3644, c: 2281.2305 },
    Term { a: 3825.0, b: 4.4941, c: 13362.4497 },
    Term { a: 2484.0, b: 4.9255, c: 2942.4634 },
    Term { a: 2307.0, b: 0.0908, c: 2544.3144 },
    Term { a: 1999.0, b: 5.3606, c: 3337.0893 },
    Term { a: 1960.0, b: 4.7425, c: 3344.1355 },
    Term { a: 1167.0, b: 2.1126, c: 5092.1520 },
    Term { a: 1103.0, b: 5.0091, c: 398.1490 },
    Term { a: 992.0, b: 5.839, c: 6151.534 },
    Term { a: 899.0, b: 4.408, c: 529.691 },
    Term { a: 807.0, b: 2.102, c: 1059.382 },
    Term { a: 798.0, b: 3.448, c: 796.298 },
    Term { a: 741.0, b: 1.499, c: 2146.165 },
    Term { a: 726.0, b: 1.245, c: 8432.764 },
    Term { a: 692.0, b: 2.134, c: 8962.455 },
    Term { a: 633.0, b: 0.894, c: 3340.595 },
    Term { a: 633.0, b: 2.924, c: 3340.630 },
    Term { a: 630.0, b: 1.287, c: 1751.540 },
    Term { a: 574.0, b: 0.829, c: 2914.014 },
    Term { a: 526.0, b: 5.383, c: 3738.761 },
    Term { a: 473.0, b: 5.199, c: 3127.313 },
    Term { a: 348.0, b: 4.832, c: 16703.062 },
    Term { a: 284.0, b: 2.907, c: 3532.061 },
    Term { a: 280.0, b: 5.257, c: 6283.076 },
    Term { a: 276.0, b: 1.218, c: 6254.627 },
    Term { a: 275.0, b: 2.908, c: 1748.016 },
    Term { a: 270.0, b: 3.764, c: 5884.927 },
    Term { a: 239.0, b: 2.037, c: 1194.447 },
    Term { a: 234.0, b: 5.105, c: 5486.778 },
    Term { a: 228.0, b: 3.255, c: 6872.673 },
    Term { a: 223.0, b: 4.199, c: 3149.164 },
    Term { a: 219.0, b: 5.583, c: 191.448 },
    Term { a: 208.0, b: 5.255, c: 3340.545 },
    Term { a: 208.0, b: 4.846, c: 3340.680 },
    Term { a: 186.0, b: 5.699, c: 6677.702 },
    Term { a: 183.0, b: 5.081, c: 6684.748 },
    Term { a: 179.0, b: 4.184, c: 3333.499 },
    Term { a: 176.0, b: 5.953, c: 3870.303 },
    Term { a: 164.0, b: 3.799, c: 4136.910 },
];

const R1: &[Term] = &[
    Term { a: 1107433.0, b: 2.0325052, c: 3340.6124267 },
    Term { a: 103176.0, b: 2.370718, c: 6681.224853 },
    Term { a: 12877.0, b: 0.0, c: 0.0 },
    Term { a: 10816.0, b: 2.70888, c: 10021.83728 },
    Term { a: 1195.0, b: 3.0470, c: 13362.4497 },
    Term { a: 439.0, b: 2.888, c: 2281.230 },
    Term { a: 396.0, b: 3.423, c: 3344.136 },
    Term { a: 183.0, b: 1.584, c: 2544.314 },
    Term { a: 136.0, b: 3.385, c: 16703.062 },
    Term { a: 128.0, b: 6.043, c: 3337.089 },
    Term { a: 128.0, b: 0.630, c: 1059.382 },
    Term { a: 127.0, b: 1.954, c: 796.298 },
    Term { a: 118.0, b: 2.998, c: 2146.165 },
    Term { a: 88.0, b: 3.42, c: 398.15 },
    Term { a: 83.0, b: 3.86, c: 3738.76 },
    Term { a: 76.0, b: 4.45, c: 6151.53 },
    Term { a: 72.0, b: 2.76, c: 529.69 },
    Term { a: 67.0, b: 2.55, c: 1751.54 },
    Term { a: 66.0, b: 4.41, c: 1748.02 },
    Term { a: 58.0, b: 0.54, c: 1194.45 },
    Term { a: 54.0, b: 0.68, c: 8962.46 },
    Term { a: 51.0, b: 3.73, c: 6684.75 },
    Term { a: 49.0, b: 5.73, c: 3340.60 },
    Term { a: 49.0, b: 1.48, c: 3340.63 },
    Term { a: 48.0, b: 2.58, c: 3149.16 },
    Term { a: 48.0, b: 2.29, c: 2914.01 },
    Term { a: 39.0, b: 2.32, c: 4136.91 },
];

const R2: &[Term] = &[
    Term { a: 44242.0, b: 0.47931, c: 3340.61243 },
    Term { a: 8138.0, b: 0.8700, c: 6681.2249 },
    Term { a: 1275.0, b: 1.2259, c: 10021.8373 },
    Term { a: 187.0, b: 1.573, c: 13362.450 },
    Term { a: 52.0, b: 3.14, c: 0.0 },
    Term { a: 41.0, b: 1.97, c: 3344.14 },
    Term { a: 27.0, b: 1.92, c: 16703.06 },
    Term { a: 18.0, b: 4.43, c: 2281.23 },
    Term { a: 12.0, b: 4.53, c: 3185.19 },
    Term { a: 10.0, b: 5.39, c: 1059.38 },
    Term { a: 10.0, b: 0.42, c: 796.30 },
];

const R3: &[Term] = &[
    Term { a: 1113.0, b: 5.1499, c: 3340.6124 },
    Term { a: 424.0, b: 5.613, c: 6681.225 },
    Term { a: 100.0, b: 5.997, c: 10021.837 },
    Term { a: 20.0, b: 0.08, c: 13362.45 },
    Term { a: 5.0, b: 3.14, c: 0.0 },
    Term { a: 3.0, b: 0.43, c: 16703.06 },
];

const R4: &[Term] = &[
    Term { a: 20.0, b: 3.58, c: 3340.61 },
    Term { a: 16.0, b: 4.05, c: 6681.22 },
    Term { a: 6.0, b: 4.46, c: 10021.84 },
    Term { a: 2.0, b: 4.84, c: 13362.45 },
];
