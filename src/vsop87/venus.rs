#![allow(clippy::excessive_precision)]
//! VSOP87D series for Venus
//!
//! Heliocentric coordinates referred to the mean dynamical ecliptic and equinox of date.
//! Abridged series, 93 terms. Amplitudes are in units of 1e-8 rad (L, B) and 1e-8 AU (R).

use super::{PlanetSeries, Term};

pub const VENUS: PlanetSeries = PlanetSeries {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3, R4],
};

const L0: &[Term] = &[
    Term { a: 317614667.0, b: 0.0, c: 0.0 },
    Term { a: 1353968.0, b: 5.5931332, c: 10213.2855462 },
    Term { a: 89892.0, b: 5.30650, c: 20426.57109 },
    Term { a: 5477.0, b: 4.4163, c: 7860.4194 },
    Term { a: 3456.0, b: 2.6996, c: 11790.6291 },
    Term { a: 2372.0, b: 2.9938, c: 3930.2097 },
    Term { a: 1664.0, b: 4.2502, c: 1577.3435 },
    Term { a: 1438.0, b: 4.1575, c: 9683.5946 },
    Term { a: 1317.0, b: 5.1867, c: 26.2983 },
    Term { a: 1201.0, b: 6.1536, c: 30639.8566 },
    Term { a: 769.0, b: 0.816, c: 9437.763 },
    Term { a: 761.0, b: 1.950, c: 529.691 },
    Term { a: 708.0, b: 1.065, c: 775.523 },
    Term { a: 585.0, b: 3.998, c: 191.448 },
    Term { a: 500.0, b: 4.123, c: 15720.839 },
    Term { a: 429.0, b: 3.586, c: 19367.189 },
    Term { a: 327.0, b: 5.677, c: 5507.553 },
    Term { a: 326.0, b: 4.591, c: 10404.734 },
    Term { a: 232.0, b: 3.163, c: 9153.904 },
    Term { a: 180.0, b: 4.653, c: 1109.379 },
    Term { a: 155.0, b: 5.570, c: 19651.048 },
    Term { a: 128.0, b: 4.226, c: 20.775 },
    Term { a: 128.0, b: 0.962, c: 5661.332 },
    Term { a: 106.0, b: 1.537, c: 801.821 },
];

const L1: &[Term] = &[
    Term { a: 1021352943053.0, b: 0.0, c: 0.0 },
    Term { a: 95708.0, b: 2.46424, c: 10213.28555 },
    Term { a: 14445.0, b: 0.51625, c: 20426.57109 },
    Term { a: 213.0, b: 1.795, c: 30639.857 },
    Term { a: 174.0, b: 2.655, c: 26.298 },
    Term { a: 152.0, b: 6.106, c: 1577.344 },
    Term { a: 82.0, b: 5.70, c: 191.45 },
    Term { a: 70.0, b: 2.68, c: 9437.76 },
    Term { a: 52.0, b: 3.60, c: 775.52 },
    Term { a: 38.0, b: 1.03, c: 529.69 },
    Term { a: 30.0, b: 1.25, c: 5507.55 },
    Term { a: 25.0, b: 6.11, c: 10404.73 },
];

const L2: &[Term] = &[
    Term { a: 54127.0, b: 0.0, c: 0.0 },
    Term { a: 3891.0, b: 0.3451, c: 10213.2855 },
    Term { a: 1338.0, b: 2.0201, c: 20426.5711 },
    Term { a: 24.0, b: 2.05, c: 26.30 },
    Term { a: 19.0, b: 3.54, c: 30639.86 },
    Term { a: 10.0, b: 3.97, c: 775.52 },
    Term { a: 7.0, b: 1.52, c: 1577.34 },
    Term { a: 6.0, b: 1.00, c: 191.45 },
];

const L3: &[Term] = &[
    Term { a: 136.0, b: 4.804, c: 10213.286 },
    Term { a: 78.0, b: 3.67, c: 20426.57 },
    Term { a: 26.0, b: 0.0, c: 0.0 },
];

const L4: &[Term] = &[
    Term { a: 114.0, b: 3.1416, c: 0.0 },
    Term { a: 3.0, b: 5.21, c: 20426.57 },
    Term { a: 2.0, b: 2.51, c: 10213.29 },
];

const L5: &[Term] = &[
    Term { a: 1.0, b: 3.14, c: 0.0 },
];

const B0: &[Term] = &[
    Term { a: 5923638.0, b: 0.2670278, c: 10213.2855462 },
    Term { a: 40108.0, b: 1.14737, c: 20426.57109 },
    Term { a: 32815.0, b: 3.14159, c: 0.0 },
    Term { a: 1011.0, b: 1.0895, c: 30639.8566 },
    Term { a: 149.0, b: 6.254, c: 18073.705 },
    Term { a: 138.0, b: 0.860, c: 1577.344 },
    Term { a: 130.0, b: 3.672, c: 9437.763 },
    Term { a: 120.0, b: 3.705, c: 2352.866 },
    Term { a: 108.0, b: 4.539, c: 22003.915 },
];

const B1: &[Term] = &[
    Term { a: 513348.0, b: 1.803643, c: 10213.285546 },
    Term { a: 4380.0, b: 3.3862, c: 20426.5711 },
    Term { a: 199.0, b: 0.0, c: 0.0 },
    Term { a: 197.0, b: 2.530, c: 30639.857 },
];

const B2: &[Term] = &[
    Term { a: 22378.0, b: 3.38509, c: 10213.28555 },
    Term { a: 282.0, b: 0.0, c: 0.0 },
    Term { a: 173.0, b: 5.256, c: 20426.571 },
    Term { a: 27.0, b: 3.87, c: 30639.86 },
];

const B3: &[Term] = &[
    Term { a: 647.0, b: 4.992, c: 10213.286 },
    Term { a: 20.0, b: 3.14, c: 0.0 },
    Term { a: 6.0, b: 0.77, c: 20426.57 },
    Term { a: 3.0, b: 5.44, c: 30639.86 },
];

const B4: &[Term] = &[
    Term { a: 14.0, b: 0.32, c: 10213.29 },
];

const R0: &[Term] = &[
    Term { a: 72334821.0, b: 0.0, c: 0.0 },
    Term { a: 489824.0, b: 4.021518, c: 10213.285546 },
    Term { a: 1658.0, b: 4.9021, c: 20426.5711 },
    Term { a: 1632.0, b: 2.8455, c: 7860.4194 },
    Term { a: 1378.0, b: 1.1285, c: 11790.6291 },
    Term { a: 498.0, b: 2.587, c: 9683.595 },
    Term { a: 374.0, b: 1.423, c: 3930.210 },
    Term { a: 264.0, b: 5.529, c: 9437.763 },
    Term { a: 237.0, b: 2.551, c: 15720.839 },
    Term { a: 222.0, b: 2.013, c: 19367.189 },
    Term { a: 126.0, b: 2.728, c: 1577.344 },
    Term { a: 119.0, b: 3.020, c: 10404.734 },
];

const R1: &[Term] = &[
    Term { a: 34551.0, b: 0.89199, c: 10213.28555 },
    Term { a: 234.0, b: 1.772, c: 20426.571 },
    Term { a: 234.0, b: 3.142, c: 0.0 },
];

const R2: &[Term] = &[
    Term { a: 1407.0, b: 5.0637, c: 10213.2855 },
    Term { a: 16.0, b: 5.47, c: 20426.57 },
    Term { a: 13.0, b: 0.0, c: 0.0 },
];

const R3: &[Term] = &[
    Term { a: 50.0, b: 3.22, c: 10213.29 },
];

const R4: &[Term] = &[
    Term { a: 1.0, b: 0.92, c: 10213.29 },
];
