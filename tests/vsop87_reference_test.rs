mod common;

use meeus::vsop87::{corrected_coordinates, heliocentric_coordinates, Planet};

use crate::common::angular_separation_rad;

/// Full VSOP87D values (L, B in radians, R in AU), every 100 Julian years back from J2000.0.
#[rustfmt::skip]
const REFERENCE: [(f64, Planet, f64, f64, f64); 80] = [
    (2451545.0, Planet::Mercury, 4.4293481036, -0.0527573409, 0.4664714751),
    (2415020.0, Planet::Mercury, 3.4851161911, 0.0565906173, 0.4183426275),
    (2378495.0, Planet::Mercury, 2.0737894888, 0.1168184804, 0.3233909533),
    (2341970.0, Planet::Mercury, 0.1910149587, -0.0682441256, 0.3381563139),
    (2305445.0, Planet::Mercury, 5.183642182, -0.1170914848, 0.4326517759),
    (2268920.0, Planet::Mercury, 4.2636517903, -0.0457048516, 0.4661523936),
    (2232395.0, Planet::Mercury, 3.3115600862, 0.0639722347, 0.4152385205),
    (2195870.0, Planet::Mercury, 1.8738888759, 0.1126774697, 0.3209366232),
    (2159345.0, Planet::Mercury, 6.281982606, -0.0768697084, 0.341435425),
    (2122820.0, Planet::Mercury, 5.0128397764, -0.1143275808, 0.4352063237),
    (2451545.0, Planet::Venus, 3.1870221833, 0.0569782849, 0.7202129253),
    (2415020.0, Planet::Venus, 5.9749622238, -0.0591260014, 0.7274719359),
    (2378495.0, Planet::Venus, 2.5083656668, 0.0552309407, 0.7185473298),
    (2341970.0, Planet::Venus, 5.3115708036, -0.0455979904, 0.7283407528),
    (2305445.0, Planet::Venus, 1.8291359617, 0.0311394084, 0.7186375037),
    (2268920.0, Planet::Venus, 4.6495448744, -0.0145437542, 0.7273363753),
    (2232395.0, Planet::Venus, 1.1527504143, -0.0054100666, 0.7205428514),
    (2195870.0, Planet::Venus, 3.9850309909, 0.0222342485, 0.7247441174),
    (2159345.0, Planet::Venus, 0.4804699931, -0.039550525, 0.7235430458),
    (2122820.0, Planet::Venus, 3.3145399295, 0.0505016053, 0.7215819783),
    (2451545.0, Planet::Earth, 1.7519238681, -3.9656e-06, 0.9833276819),
    (2415020.0, Planet::Earth, 1.7391225563, -5.679e-07, 0.9832689778),
    (2378495.0, Planet::Earth, 1.7262638916, 2.083e-07, 0.9832274321),
    (2341970.0, Planet::Earth, 1.7134419105, 2.5051e-06, 0.9831498441),
    (2305445.0, Planet::Earth, 1.7006065938, -1.6359e-06, 0.9831254376),
    (2268920.0, Planet::Earth, 1.687762496, -2.034e-06, 0.9830816756),
    (2232395.0, Planet::Earth, 1.6750110961, 3.7879e-06, 0.9830754409),
    (2195870.0, Planet::Earth, 1.6622048657, 1.5133e-06, 0.9830942385),
    (2159345.0, Planet::Earth, 1.6495143197, -1.3003e-06, 0.9830440397),
    (2122820.0, Planet::Earth, 1.6367193623, -3.1292e-06, 0.9830331815),
    (2451545.0, Planet::Mars, 6.2735389983, -0.0247779824, 1.3912076925),
    (2415020.0, Planet::Mars, 4.9942005211, -0.0271965869, 1.4218777705),
    (2378495.0, Planet::Mars, 3.8711855478, 0.0034969939, 1.5615140011),
    (2341970.0, Planet::Mars, 2.916664869, 0.0280268149, 1.6584697082),
    (2305445.0, Planet::Mars, 2.0058210394, 0.0300702181, 1.6371997207),
    (2268920.0, Planet::Mars, 1.0050966939, 0.0066676098, 1.512362269),
    (2232395.0, Planet::Mars, 6.0979760762, -0.0266794243, 1.3925964529),
    (2195870.0, Planet::Mars, 4.8193924948, -0.0255031923, 1.4208707215),
    (2159345.0, Planet::Mars, 3.6939294875, 0.0065885509, 1.5593802008),
    (2122820.0, Planet::Mars, 2.7367104344, 0.0295522719, 1.6571002307),
    (2451545.0, Planet::Jupiter, 0.6334614186, -0.0205001039, 4.9653813154),
    (2415020.0, Planet::Jupiter, 4.0927527024, 0.0161446618, 5.3850276671),
    (2378495.0, Planet::Jupiter, 1.5255696771, -0.0043606936, 5.1318457604),
    (2341970.0, Planet::Jupiter, 4.8888943125, -0.0011098085, 5.1888133656),
    (2305445.0, Planet::Jupiter, 2.3348832684, 0.0140523907, 5.3439455032),
    (2268920.0, Planet::Jupiter, 5.7527666852, -0.0188346311, 5.0018007395),
    (2232395.0, Planet::Jupiter, 3.088951535, 0.0231157947, 5.4491570191),
    (2195870.0, Planet::Jupiter, 0.377650343, -0.0222448936, 4.9715071036),
    (2159345.0, Planet::Jupiter, 3.8455069137, 0.0185554473, 5.3896206945),
    (2122820.0, Planet::Jupiter, 1.2695066546, -0.007533574, 5.1193587362),
    (2451545.0, Planet::Saturn, 0.7980038761, -0.0401984149, 9.1838483715),
    (2415020.0, Planet::Saturn, 4.6512836347, 0.0192701409, 10.0668531997),
    (2378495.0, Planet::Saturn, 2.1956677359, 0.0104156566, 9.1043068639),
    (2341970.0, Planet::Saturn, 5.8113963637, -0.0291472787, 9.7629994924),
    (2305445.0, Planet::Saturn, 3.5217555199, 0.0437035058, 9.7571035629),
    (2268920.0, Planet::Saturn, 0.8594235308, -0.0379350088, 9.0669212839),
    (2232395.0, Planet::Saturn, 4.6913199264, 0.0146771898, 10.1065692994),
    (2195870.0, Planet::Saturn, 2.2948875823, 0.0178533697, 9.1857599537),
    (2159345.0, Planet::Saturn, 5.8660241564, -0.0333866503, 9.592717394),
    (2122820.0, Planet::Saturn, 3.5570108069, 0.0435371139, 9.8669939498),
    (2451545.0, Planet::Uranus, 5.5225485803, -0.0119527838, 19.9240482667),
    (2415020.0, Planet::Uranus, 4.3397761173, 0.0011570307, 18.992716362),
    (2378495.0, Planet::Uranus, 3.0388348558, 0.0132392955, 18.2991154397),
    (2341970.0, Planet::Uranus, 1.724220472, 0.0059836565, 18.7966208854),
    (2305445.0, Planet::Uranus, 0.5223325214, -0.0089983885, 19.7819882707),
    (2268920.0, Planet::Uranus, 5.6817615582, -0.0129257254, 20.0300462993),
    (2232395.0, Planet::Uranus, 4.5254482963, -0.001930334, 19.2694311058),
    (2195870.0, Planet::Uranus, 3.255722172, 0.0120919639, 18.3948228639),
    (2159345.0, Planet::Uranus, 1.9333853935, 0.0088045918, 18.5841501334),
    (2122820.0, Planet::Uranus, 0.7007226224, -0.0065610611, 19.5612078271),
    (2451545.0, Planet::Neptune, 5.3045629252, 0.0042236789, 30.1205328392),
    (2415020.0, Planet::Neptune, 1.4956195225, -0.021961003, 29.8710345051),
    (2378495.0, Planet::Neptune, 3.9290537977, 0.0310692112, 30.3209192288),
    (2341970.0, Planet::Neptune, 0.0815199679, -0.0260752533, 29.8685860491),
    (2305445.0, Planet::Neptune, 2.5537079778, 0.010237401, 30.1360158724),
    (2268920.0, Planet::Neptune, 4.9678695785, 0.0116907777, 30.1785350169),
    (2232395.0, Planet::Neptune, 1.1523661584, -0.0273547725, 29.8326055236),
    (2195870.0, Planet::Neptune, 3.5930943433, 0.0316878975, 30.310911496),
    (2159345.0, Planet::Neptune, 6.020359658, -0.0215169842, 29.9065506848),
    (2122820.0, Planet::Neptune, 2.2124988267, 0.0027498093, 30.065369361),
];

/// Maximum deviation of the abridged series from the full theory, per planet: (L, B, R).
fn tolerance(planet: Planet) -> (f64, f64, f64) {
    match planet {
        Planet::Mercury | Planet::Venus | Planet::Earth | Planet::Mars => (2e-5, 1e-5, 1e-5),
        Planet::Jupiter => (2e-5, 1e-5, 5e-5),
        Planet::Saturn => (2e-4, 2e-5, 3e-4),
        Planet::Uranus => (5e-4, 2e-5, 2e-4),
        Planet::Neptune => (2e-5, 1e-5, 2e-4),
    }
}

#[test]
fn test_against_full_theory() {
    for (jde, planet, l_ref, b_ref, r_ref) in REFERENCE {
        let (l, b, r) = heliocentric_coordinates(jde, planet);
        let (tol_l, tol_b, tol_r) = tolerance(planet);

        let dl = angular_separation_rad(l, l_ref);
        assert!(dl < tol_l, "{planet} at {jde}: dL = {dl:e}");
        assert!((b - b_ref).abs() < tol_b, "{planet} at {jde}: dB = {:e}", b - b_ref);
        assert!((r - r_ref).abs() < tol_r, "{planet} at {jde}: dR = {:e}", r - r_ref);
    }
}

#[test]
fn test_every_planet_is_covered() {
    for planet in Planet::ALL {
        assert_eq!(
            REFERENCE.iter().filter(|row| row.1 == planet).count(),
            10,
            "{planet}"
        );
    }
}

#[test]
fn test_fk5_frame_is_a_small_shift() {
    // The FK5 correction stays within a few tenths of an arcsecond in longitude and latitude
    for (jde, planet, ..) in REFERENCE.iter().step_by(7) {
        let (l, b, r) = heliocentric_coordinates(*jde, *planet);
        let fk5 = corrected_coordinates(*jde, *planet);

        assert!((0.0..360.0).contains(&fk5.lon));
        let dl = angular_separation_rad(fk5.lon.to_radians(), l).to_degrees() * 3600.0;
        let db = (fk5.lat - b.to_degrees()).abs() * 3600.0;
        assert!(dl < 0.15, "{planet} at {jde}: {dl} arcsec");
        assert!(db < 0.1, "{planet} at {jde}: {db} arcsec");
        assert_eq!(fk5.distance, r);
    }
}
