#![allow(clippy::excessive_precision)]
//! VSOP87D series for Mercury
//!
//! Heliocentric coordinates referred to the mean dynamical ecliptic and equinox of date.
//! Abridged series, 155 terms. Amplitudes are in units of 1e-8 rad (L, B) and 1e-8 AU (R).

use super::{PlanetSeries, Term};

pub const MERCURY: PlanetSeries = PlanetSeries {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3],
};

const L0: &[Term] = &[
    Term { a: 440250710.0, b: 0.0, c: 0.0 },
    Term { a: 40989415.0, b: 1.48302034, c: 26087.90314157 },
    Term { a: 5046294.0, b: 4.4778549, c: 52175.8062831 },
    Term { a: 855347.0, b: 1.165203, c: 78263.709425 },
    Term { a: 165590.0, b: 4.119692, c: 104351.612566 },
    Term { a: 34562.0, b: 0.77931, c: 130439.51571 },
    Term { a: 7583.0, b: 3.7135, c: 156527.4188 },
    Term { a: 3560.0, b: 1.5120, c: 1109.3786 },
    Term { a: 1803.0, b: 4.1033, c: 5661.3320 },
    Term { a: 1726.0, b: 0.3583, c: 182615.3220 },
    Term { a: 1590.0, b: 2.9951, c: 25028.5212 },
    Term { a: 1365.0, b: 4.5992, c: 27197.2817 },
    Term { a: 1017.0, b: 0.8803, c: 31749.2352 },
    Term { a: 714.0, b: 1.541, c: 24978.525 },
    Term { a: 644.0, b: 5.303, c: 21535.950 },
    Term { a: 451.0, b: 6.050, c: 51116.424 },
    Term { a: 404.0, b: 3.282, c: 208703.225 },
    Term { a: 352.0, b: 5.242, c: 20426.571 },
    Term { a: 345.0, b: 2.792, c: 15874.618 },
    Term { a: 343.0, b: 5.765, c: 955.600 },
    Term { a: 339.0, b: 5.863, c: 25558.212 },
    Term { a: 325.0, b: 1.337, c: 53285.185 },
    Term { a: 273.0, b: 2.495, c: 529.691 },
    Term { a: 264.0, b: 3.917, c: 57837.138 },
    Term { a: 260.0, b: 0.987, c: 4551.953 },
    Term { a: 239.0, b: 0.113, c: 1059.382 },
    Term { a: 235.0, b: 0.267, c: 11322.664 },
    Term { a: 217.0, b: 0.660, c: 13521.751 },
    Term { a: 209.0, b: 2.092, c: 47623.853 },
    Term { a: 183.0, b: 2.629, c: 27043.503 },
    Term { a: 182.0, b: 2.434, c: 25661.305 },
    Term { a: 176.0, b: 4.536, c: 51066.428 },
    Term { a: 173.0, b: 2.452, c: 24498.830 },
    Term { a: 142.0, b: 3.360, c: 37410.567 },
    Term { a: 138.0, b: 0.291, c: 10213.286 },
    Term { a: 125.0, b: 3.721, c: 39609.655 },
    Term { a: 118.0, b: 2.781, c: 77204.327 },
    Term { a: 106.0, b: 4.206, c: 19804.827 },
];

const L1: &[Term] = &[
    Term { a: 2608814706223.0, b: 0.0, c: 0.0 },
    Term { a: 1126008.0, b: 6.2170397, c: 26087.9031416 },
    Term { a: 303471.0, b: 3.055655, c: 52175.806283 },
    Term { a: 80538.0, b: 6.10455, c: 78263.70942 },
    Term { a: 21245.0, b: 2.83532, c: 104351.61257 },
    Term { a: 5592.0, b: 5.8268, c: 130439.5157 },
    Term { a: 1472.0, b: 2.5185, c: 156527.4188 },
    Term { a: 388.0, b: 5.480, c: 182615.322 },
    Term { a: 352.0, b: 3.052, c: 1109.379 },
    Term { a: 103.0, b: 2.149, c: 24978.525 },
    Term { a: 94.0, b: 6.12, c: 27197.28 },
    Term { a: 91.0, b: 0.00, c: 20426.57 },
    Term { a: 52.0, b: 5.62, c: 5661.33 },
    Term { a: 44.0, b: 4.57, c: 208703.23 },
    Term { a: 28.0, b: 3.04, c: 51066.43 },
    Term { a: 27.0, b: 5.09, c: 234791.13 },
];

const L2: &[Term] = &[
    Term { a: 53050.0, b: 0.0, c: 0.0 },
    Term { a: 16904.0, b: 4.69072, c: 26087.90314 },
    Term { a: 7397.0, b: 1.3474, c: 52175.8063 },
    Term { a: 3018.0, b: 4.4564, c: 78263.7094 },
    Term { a: 1107.0, b: 1.2623, c: 104351.6126 },
    Term { a: 378.0, b: 4.320, c: 130439.516 },
    Term { a: 123.0, b: 1.069, c: 156527.419 },
    Term { a: 39.0, b: 4.08, c: 182615.32 },
    Term { a: 15.0, b: 4.63, c: 1109.38 },
    Term { a: 12.0, b: 0.79, c: 208703.23 },
];

const L3: &[Term] = &[
    Term { a: 188.0, b: 0.035, c: 52175.806 },
    Term { a: 142.0, b: 3.125, c: 26087.903 },
    Term { a: 97.0, b: 3.00, c: 78263.71 },
    Term { a: 44.0, b: 6.02, c: 104351.61 },
    Term { a: 35.0, b: 0.0, c: 0.0 },
    Term { a: 18.0, b: 2.78, c: 130439.52 },
    Term { a: 7.0, b: 5.82, c: 156527.42 },
    Term { a: 3.0, b: 2.57, c: 182615.32 },
];

const L4: &[Term] = &[
    Term { a: 114.0, b: 3.1416, c: 0.0 },
    Term { a: 2.0, b: 2.03, c: 26087.90 },
    Term { a: 2.0, b: 1.42, c: 78263.71 },
    Term { a: 2.0, b: 4.50, c: 52175.81 },
    Term { a: 1.0, b: 4.50, c: 104351.61 },
    Term { a: 1.0, b: 1.27, c: 130439.52 },
];

const L5: &[Term] = &[
    Term { a: 1.0, b: 3.14, c: 0.0 },
];

const B0: &[Term] = &[
    Term { a: 11737529.0, b: 1.98357499, c: 26087.90314157 },
    Term { a: 2388077.0, b: 5.0373896, c: 52175.8062831 },
    Term { a: 1222840.0, b: 3.1415927, c: 0.0 },
    Term { a: 543252.0, b: 1.796444, c: 78263.709425 },
    Term { a: 129779.0, b: 4.832325, c: 104351.612566 },
    Term { a: 31867.0, b: 1.58088, c: 130439.51571 },
    Term { a: 7963.0, b: 4.6097, c: 156527.4188 },
    Term { a: 2014.0, b: 1.3532, c: 182615.3220 },
    Term { a: 514.0, b: 4.378, c: 208703.225 },
    Term { a: 209.0, b: 2.020, c: 24978.525 },
    Term { a: 208.0, b: 4.918, c: 27197.282 },
    Term { a: 132.0, b: 1.119, c: 234791.128 },
    Term { a: 121.0, b: 1.813, c: 53285.185 },
    Term { a: 100.0, b: 5.657, c: 20426.571 },
];

const B1: &[Term] = &[
    Term { a: 429151.0, b: 3.501698, c: 26087.903142 },
    Term { a: 146234.0, b: 3.141593, c: 0.0 },
    Term { a: 22675.0, b: 0.01515, c: 52175.80628 },
    Term { a: 10895.0, b: 0.48540, c: 78263.70942 },
    Term { a: 6353.0, b: 3.4294, c: 104351.6126 },
    Term { a: 2496.0, b: 0.1605, c: 130439.5157 },
    Term { a: 860.0, b: 3.185, c: 156527.419 },
    Term { a: 278.0, b: 6.210, c: 182615.322 },
    Term { a: 86.0, b: 2.95, c: 208703.23 },
    Term { a: 28.0, b: 0.29, c: 27197.28 },
    Term { a: 26.0, b: 5.98, c: 234791.13 },
];

const B2: &[Term] = &[
    Term { a: 11831.0, b: 4.79066, c: 26087.90314 },
    Term { a: 1914.0, b: 0.0, c: 0.0 },
    Term { a: 1045.0, b: 1.2122, c: 52175.8063 },
    Term { a: 266.0, b: 4.434, c: 78263.709 },
    Term { a: 170.0, b: 1.623, c: 104351.613 },
    Term { a: 96.0, b: 4.80, c: 130439.52 },
    Term { a: 45.0, b: 1.61, c: 156527.42 },
    Term { a: 18.0, b: 4.67, c: 182615.32 },
    Term { a: 7.0, b: 1.43, c: 208703.23 },
];

const B3: &[Term] = &[
    Term { a: 235.0, b: 0.354, c: 26087.903 },
    Term { a: 161.0, b: 0.0, c: 0.0 },
    Term { a: 19.0, b: 4.36, c: 52175.81 },
    Term { a: 6.0, b: 2.51, c: 78263.71 },
    Term { a: 5.0, b: 6.14, c: 104351.61 },
    Term { a: 3.0, b: 3.14, c: 156527.42 },
    Term { a: 2.0, b: 6.27, c: 130439.52 },
];

const B4: &[Term] = &[
    Term { a: 4.0, b: 1.75, c: 26087.90 },
    Term { a: 1.0, b: 3.14, c: 0.0 },
];

const R0: &[Term] = &[
    Term { a: 39528272.0, b: 0.0, c: 0.0 },
    Term { a: 7834132.0, b: 6.1923372, c: 26087.9031416 },
    Term { a: 795526.0, b: 2.959897, c: 52175.806283 },
    Term { a: 121282.0, b: 6.010642, c: 78263.709425 },
    Term { a: 21922.0, b: 2.77820, c: 104351.61257 },
    Term { a: 4354.0, b: 5.8289, c: 130439.5157 },
    Term { a: 918.0, b: 2.597, c: 156527.419 },
    Term { a: 290.0, b: 1.424, c: 25028.521 },
    Term { a: 260.0, b: 3.028, c: 27197.282 },
    Term { a: 202.0, b: 5.647, c: 182615.322 },
    Term { a: 201.0, b: 5.592, c: 31749.235 },
    Term { a: 142.0, b: 6.253, c: 24978.525 },
    Term { a: 100.0, b: 3.734, c: 21535.950 },
];

const R1: &[Term] = &[
    Term { a: 217348.0, b: 4.656172, c: 26087.903142 },
    Term { a: 44142.0, b: 1.42386, c: 52175.80628 },
    Term { a: 10094.0, b: 4.47466, c: 78263.70942 },
    Term { a: 2433.0, b: 1.2423, c: 104351.6126 },
    Term { a: 1624.0, b: 0.0, c: 0.0 },
    Term { a: 604.0, b: 4.293, c: 130439.516 },
    Term { a: 153.0, b: 1.061, c: 156527.419 },
    Term { a: 39.0, b: 4.11, c: 182615.32 },
];

const R2: &[Term] = &[
    Term { a: 3118.0, b: 3.0823, c: 26087.9031 },
    Term { a: 1245.0, b: 6.1518, c: 52175.8063 },
    Term { a: 425.0, b: 2.926, c: 78263.709 },
    Term { a: 136.0, b: 5.980, c: 104351.613 },
    Term { a: 42.0, b: 2.75, c: 130439.52 },
    Term { a: 22.0, b: 3.14, c: 0.0 },
    Term { a: 13.0, b: 5.80, c: 156527.42 },
];

const R3: &[Term] = &[
    Term { a: 33.0, b: 1.68, c: 26087.90 },
    Term { a: 24.0, b: 4.63, c: 52175.81 },
    Term { a: 12.0, b: 1.39, c: 78263.71 },
    Term { a: 5.0, b: 4.44, c: 104351.61 },
    Term { a: 2.0, b: 1.21, c: 130439.52 },
];
