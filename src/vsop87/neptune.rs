#![allow(clippy::excessive_precision)]
//! VSOP87D series for Neptune
//!
//! Heliocentric coordinates referred to the mean dynamical ecliptic and equinox of date.
//! Abridged series, 157 terms. Amplitudes are in units of 1e-8 rad (L, B) and 1e-8 AU (R).

use super::{PlanetSeries, Term};

pub const NEPTUNE: PlanetSeries = PlanetSeries {
    longitude: &[L0, L1, L2, L3, L4],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3],
};

const L0: &[Term] = &[
    Term { a: 531188633.0, b: 0.0, c: 0.0 },
    Term { a: 1798476.0, b: 2.9010127, c: 38.1330356 },
    Term { a: 1019728.0, b: 0.4858092, c: 1.4844727 },
    Term { a: 124532.0, b: 4.830081, c: 36.648563 },
    Term { a: 42064.0, b: 5.41055, c: 2.96895 },
    Term { a: 37715.0, b: 6.09222, c: 35.16409 },
    Term { a: 33785.0, b: 1.24489, c: 76.26607 },
    Term { a: 16483.0, b: 0.00008, c: 491.55793 },
    Term { a: 9199.0, b: 4.9375, c: 39.6175 },
    Term { a: 8994.0, b: 0.2746, c: 175.1661 },
    Term { a: 4216.0, b: 1.9871, c: 73.2971 },
    Term { a: 3365.0, b: 1.0359, c: 33.6796 },
    Term { a: 2285.0, b: 4.2061, c: 4.4534 },
    Term { a: 1434.0, b: 2.7834, c: 74.7816 },
    Term { a: 900.0, b: 2.076, c: 109.946 },
    Term { a: 745.0, b: 3.190, c: 71.813 },
    Term { a: 506.0, b: 5.748, c: 114.399 },
    Term { a: 400.0, b: 0.350, c: 1021.249 },
    Term { a: 345.0, b: 3.462, c: 41.102 },
    Term { a: 340.0, b: 3.304, c: 77.751 },
    Term { a: 323.0, b: 2.248, c: 32.165 },
    Term { a: 306.0, b: 0.497, c: 0.521 },
    Term { a: 287.0, b: 4.505, c: 0.048 },
    Term { a: 282.0, b: 2.246, c: 146.594 },
    Term { a: 267.0, b: 4.889, c: 0.963 },
    Term { a: 252.0, b: 5.782, c: 388.465 },
    Term { a: 245.0, b: 1.247, c: 9.561 },
    Term { a: 233.0, b: 2.505, c: 137.033 },
    Term { a: 227.0, b: 1.797, c: 453.425 },
    Term { a: 170.0, b: 3.324, c: 108.461 },
    Term { a: 151.0, b: 2.192, c: 33.940 },
    Term { a: 150.0, b: 2.997, c: 5.938 },
    Term { a: 148.0, b: 0.859, c: 111.430 },
    Term { a: 119.0, b: 3.677, c: 2.448 },
    Term { a: 109.0, b: 2.416, c: 183.243 },
    Term { a: 103.0, b: 0.041, c: 0.261 },
    Term { a: 103.0, b: 4.404, c: 70.328 },
    Term { a: 102.0, b: 5.705, c: 0.112 },
];

const L1: &[Term] = &[
    Term { a: 3837687717.0, b: 0.0, c: 0.0 },
    Term { a: 16604.0, b: 4.86319, c: 1.48447 },
    Term { a: 15807.0, b: 2.27923, c: 38.13304 },
    Term { a: 3335.0, b: 3.6820, c: 76.2661 },
    Term { a: 1306.0, b: 3.6732, c: 2.9689 },
    Term { a: 605.0, b: 1.505, c: 35.164 },
    Term { a: 179.0, b: 3.453, c: 39.618 },
    Term { a: 107.0, b: 2.451, c: 4.453 },
    Term { a: 106.0, b: 2.755, c: 33.680 },
    Term { a: 73.0, b: 5.49, c: 36.65 },
    Term { a: 57.0, b: 1.86, c: 114.40 },
    Term { a: 57.0, b: 5.22, c: 0.52 },
    Term { a: 35.0, b: 4.52, c: 74.78 },
    Term { a: 32.0, b: 5.90, c: 77.75 },
    Term { a: 30.0, b: 3.67, c: 388.47 },
    Term { a: 29.0, b: 5.17, c: 9.56 },
    Term { a: 29.0, b: 5.17, c: 2.45 },
    Term { a: 26.0, b: 5.25, c: 168.05 },
];

const L2: &[Term] = &[
    Term { a: 53893.0, b: 0.0, c: 0.0 },
    Term { a: 296.0, b: 1.855, c: 1.484 },
    Term { a: 281.0, b: 1.191, c: 38.133 },
    Term { a: 270.0, b: 5.721, c: 76.266 },
    Term { a: 23.0, b: 1.21, c: 2.97 },
    Term { a: 9.0, b: 4.43, c: 35.16 },
    Term { a: 7.0, b: 0.54, c: 2.45 },
];

const L3: &[Term] = &[
    Term { a: 31.0, b: 0.0, c: 0.0 },
    Term { a: 15.0, b: 1.35, c: 76.27 },
    Term { a: 12.0, b: 6.04, c: 1.48 },
    Term { a: 12.0, b: 6.11, c: 38.13 },
];

const L4: &[Term] = &[
    Term { a: 114.0, b: 3.142, c: 0.0 },
];

const B0: &[Term] = &[
    Term { a: 3088623.0, b: 1.4410437, c: 38.1330356 },
    Term { a: 27780.0, b: 5.91272, c: 76.26607 },
    Term { a: 27624.0, b: 0.0, c: 0.0 },
    Term { a: 15448.0, b: 3.50877, c: 39.61751 },
    Term { a: 15355.0, b: 2.52124, c: 36.64856 },
    Term { a: 2000.0, b: 1.5100, c: 74.7816 },
    Term { a: 1968.0, b: 4.3778, c: 1.4845 },
    Term { a: 1015.0, b: 3.2156, c: 35.1641 },
    Term { a: 606.0, b: 2.802, c: 73.297 },
    Term { a: 595.0, b: 2.129, c: 41.102 },
    Term { a: 589.0, b: 3.187, c: 2.969 },
    Term { a: 402.0, b: 4.169, c: 114.399 },
    Term { a: 280.0, b: 1.682, c: 77.751 },
    Term { a: 262.0, b: 3.767, c: 213.299 },
    Term { a: 254.0, b: 3.271, c: 453.425 },
    Term { a: 206.0, b: 4.257, c: 529.691 },
    Term { a: 140.0, b: 3.530, c: 137.033 },
];

const B1: &[Term] = &[
    Term { a: 227279.0, b: 3.807931, c: 38.133036 },
    Term { a: 1803.0, b: 1.9758, c: 76.2661 },
    Term { a: 1433.0, b: 3.1416, c: 0.0 },
    Term { a: 1386.0, b: 4.8256, c: 36.6486 },
    Term { a: 1073.0, b: 6.0805, c: 39.6175 },
    Term { a: 147.0, b: 3.858, c: 74.782 },
    Term { a: 136.0, b: 0.478, c: 1.484 },
    Term { a: 100.0, b: 6.185, c: 35.164 },
];

const B2: &[Term] = &[
    Term { a: 9691.0, b: 5.5712, c: 38.1330 },
    Term { a: 79.0, b: 3.63, c: 76.27 },
    Term { a: 72.0, b: 0.45, c: 36.65 },
    Term { a: 59.0, b: 3.14, c: 0.0 },
    Term { a: 30.0, b: 1.61, c: 39.62 },
    Term { a: 6.0, b: 5.61, c: 74.78 },
];

const B3: &[Term] = &[
    Term { a: 273.0, b: 1.017, c: 38.133 },
    Term { a: 2.0, b: 0.0, c: 0.0 },
    Term { a: 2.0, b: 2.37, c: 36.65 },
    Term { a: 2.0, b: 5.33, c: 39.62 },
];

const B4: &[Term] = &[
    Term { a: 6.0, b: 2.67, c: 38.13 },
];

const R0: &[Term] = &[
    Term { a: 3007013206.0, b: 0.0, c: 0.0 },
    Term { a: 27062259.0, b: 1.32999459, c: 38.13303564 },
    Term { a: 1691764.0, b: 3.2518614, c: 36.6485629 },
    Term { a: 807831.0, b: 5.185928, c: 1.484473 },
    Term { a: 537761.0, b: 4.521139, c: 35.164090 },
    Term { a: 495726.0, b: 1.571057, c: 491.557929 },
    Term { a: 274572.0, b: 1.845523, c: 175.166060 },
    Term { a: 135134.0, b: 3.372206, c: 39.617508 },
    Term { a: 121802.0, b: 5.797544, c: 76.266071 },
    Term { a: 100895.0, b: 0.377027, c: 73.297126 },
    Term { a: 69792.0, b: 3.79617, c: 2.96895 },
    Term { a: 46688.0, b: 5.74938, c: 33.67962 },
    Term { a: 24594.0, b: 0.50802, c: 109.94569 },
    Term { a: 16939.0, b: 1.59422, c: 71.81265 },
    Term { a: 14230.0, b: 1.07786, c: 74.78160 },
    Term { a: 12012.0, b: 1.92062, c: 1021.24889 },
    Term { a: 8395.0, b: 0.6782, c: 146.5943 },
    Term { a: 7572.0, b: 1.0715, c: 388.4652 },
    Term { a: 5721.0, b: 2.5906, c: 4.4534 },
    Term { a: 4840.0, b: 1.9069, c: 41.1020 },
    Term { a: 4483.0, b: 2.9057, c: 529.6910 },
    Term { a: 4421.0, b: 1.7499, c: 108.4612 },
    Term { a: 4354.0, b: 0.6799, c: 32.1645 },
    Term { a: 4270.0, b: 3.4134, c: 453.4249 },
    Term { a: 3381.0, b: 0.8481, c: 183.2428 },
    Term { a: 2881.0, b: 1.9860, c: 137.0330 },
    Term { a: 2879.0, b: 3.6742, c: 350.3321 },
    Term { a: 2636.0, b: 3.0976, c: 213.2991 },
    Term { a: 2530.0, b: 5.7984, c: 490.0735 },
    Term { a: 2523.0, b: 0.4863, c: 493.0424 },
    Term { a: 2306.0, b: 2.8096, c: 70.3282 },
    Term { a: 2087.0, b: 0.6186, c: 33.9402 },
];

const R1: &[Term] = &[
    Term { a: 236339.0, b: 0.704980, c: 38.133036 },
    Term { a: 13220.0, b: 3.32015, c: 1.48447 },
    Term { a: 8622.0, b: 6.2163, c: 35.1641 },
    Term { a: 2702.0, b: 1.8814, c: 39.6175 },
    Term { a: 2155.0, b: 2.0943, c: 2.9689 },
    Term { a: 2153.0, b: 5.1687, c: 76.2661 },
    Term { a: 1603.0, b: 0.0, c: 0.0 },
    Term { a: 1464.0, b: 1.1842, c: 33.6796 },
    Term { a: 1136.0, b: 3.9189, c: 36.6486 },
    Term { a: 898.0, b: 5.241, c: 388.465 },
    Term { a: 790.0, b: 0.533, c: 168.053 },
    Term { a: 760.0, b: 0.021, c: 182.280 },
    Term { a: 607.0, b: 1.077, c: 1021.249 },
    Term { a: 572.0, b: 3.401, c: 484.444 },
    Term { a: 561.0, b: 2.887, c: 498.671 },
];

const R2: &[Term] = &[
    Term { a: 4247.0, b: 5.8991, c: 38.1330 },
    Term { a: 218.0, b: 0.346, c: 1.484 },
    Term { a: 163.0, b: 2.239, c: 168.053 },
    Term { a: 156.0, b: 4.594, c: 182.280 },
    Term { a: 127.0, b: 2.848, c: 35.164 },
];

const R3: &[Term] = &[
    Term { a: 166.0, b: 4.552, c: 38.133 },
];
