//! Periodic term tables for the Earth heliocentric position and the nutation series.
//!
//! The values are the published coefficients of the NREL Solar Position Algorithm
//! (Reda & Andreas, 2004) and are reproduced exactly. They are compiled into the
//! binary as `static` data and never change.

/// One row of a heliocentric series, evaluated as `amplitude * cos(phase + frequency * JME)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PeriodicTerm {
    /// Amplitude (A), in units of 1e-8 radians or AU
    pub amplitude: f64,
    /// Phase (B), in radians
    pub phase: f64,
    /// Frequency (C), in radians per Julian millennium
    pub frequency: f64,
}

/// One row of the nutation series.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NutationTerm {
    /// Integer multipliers of the five fundamental arguments (Y terms)
    pub multipliers: [i8; 5],
    /// Nutation in longitude coefficients (a, b) in `(a + b * JCE) * sin(argument)`
    pub longitude: [f64; 2],
    /// Nutation in obliquity coefficients (c, d) in `(c + d * JCE) * cos(argument)`
    pub obliquity: [f64; 2],
}

const fn term(amplitude: f64, phase: f64, frequency: f64) -> PeriodicTerm {
    PeriodicTerm {
        amplitude,
        phase,
        frequency,
    }
}

const fn nutation(multipliers: [i8; 5], coefficients: [f64; 4]) -> NutationTerm {
    NutationTerm {
        multipliers,
        longitude: [coefficients[0], coefficients[1]],
        obliquity: [coefficients[2], coefficients[3]],
    }
}

const L0: [PeriodicTerm; 64] = [
    term(175347046.0, 0.0, 0.0),
    term(3341656.0, 4.6692568, 6283.07585),
    term(34894.0, 4.6261, 12566.1517),
    term(3497.0, 2.7441, 5753.3849),
    term(3418.0, 2.8289, 3.5231),
    term(3136.0, 3.6277, 77713.7715),
    term(2676.0, 4.4181, 7860.4194),
    term(2343.0, 6.1352, 3930.2097),
    term(1324.0, 0.7425, 11506.7698),
    term(1273.0, 2.0371, 529.691),
    term(1199.0, 1.1096, 1577.3435),
    term(990.0, 5.233, 5884.927),
    term(902.0, 2.045, 26.298),
    term(857.0, 3.508, 398.149),
    term(780.0, 1.179, 5223.694),
    term(753.0, 2.533, 5507.553),
    term(505.0, 4.583, 18849.228),
    term(492.0, 4.205, 775.523),
    term(357.0, 2.92, 0.067),
    term(317.0, 5.849, 11790.629),
    term(284.0, 1.899, 796.298),
    term(271.0, 0.315, 10977.079),
    term(243.0, 0.345, 5486.778),
    term(206.0, 4.806, 2544.314),
    term(205.0, 1.869, 5573.143),
    term(202.0, 2.458, 6069.777),
    term(156.0, 0.833, 213.299),
    term(132.0, 3.411, 2942.463),
    term(126.0, 1.083, 20.775),
    term(115.0, 0.645, 0.98),
    term(103.0, 0.636, 4694.003),
    term(102.0, 0.976, 15720.839),
    term(102.0, 4.267, 7.114),
    term(99.0, 6.21, 2146.17),
    term(98.0, 0.68, 155.42),
    term(86.0, 5.98, 161000.69),
    term(85.0, 1.3, 6275.96),
    term(85.0, 3.67, 71430.7),
    term(80.0, 1.81, 17260.15),
    term(79.0, 3.04, 12036.46),
    term(75.0, 1.76, 5088.63),
    term(74.0, 3.5, 3154.69),
    term(74.0, 4.68, 801.82),
    term(70.0, 0.83, 9437.76),
    term(62.0, 3.98, 8827.39),
    term(61.0, 1.82, 7084.9),
    term(57.0, 2.78, 6286.6),
    term(56.0, 4.39, 14143.5),
    term(56.0, 3.47, 6279.55),
    term(52.0, 0.19, 12139.55),
    term(52.0, 1.33, 1748.02),
    term(51.0, 0.28, 5856.48),
    term(49.0, 0.49, 1194.45),
    term(41.0, 5.37, 8429.24),
    term(41.0, 2.4, 19651.05),
    term(39.0, 6.17, 10447.39),
    term(37.0, 6.04, 10213.29),
    term(37.0, 2.57, 1059.38),
    term(36.0, 1.71, 2352.87),
    term(36.0, 1.78, 6812.77),
    term(33.0, 0.59, 17789.85),
    term(30.0, 0.44, 83996.85),
    term(30.0, 2.74, 1349.87),
    term(25.0, 3.16, 4690.48),
];

const L1: [PeriodicTerm; 34] = [
    term(628331966747.0, 0.0, 0.0),
    term(206059.0, 2.678235, 6283.07585),
    term(4303.0, 2.6351, 12566.1517),
    term(425.0, 1.59, 3.523),
    term(119.0, 5.796, 26.298),
    term(109.0, 2.966, 1577.344),
    term(93.0, 2.59, 18849.23),
    term(72.0, 1.14, 529.69),
    term(68.0, 1.87, 398.15),
    term(67.0, 4.41, 5507.55),
    term(59.0, 2.89, 5223.69),
    term(56.0, 2.17, 155.42),
    term(45.0, 0.4, 796.3),
    term(36.0, 0.47, 775.52),
    term(29.0, 2.65, 7.11),
    term(21.0, 5.34, 0.98),
    term(19.0, 1.85, 5486.78),
    term(19.0, 4.97, 213.3),
    term(17.0, 2.99, 6275.96),
    term(16.0, 0.03, 2544.31),
    term(16.0, 1.43, 2146.17),
    term(15.0, 1.21, 10977.08),
    term(12.0, 2.83, 1748.02),
    term(12.0, 3.26, 5088.63),
    term(12.0, 5.27, 1194.45),
    term(12.0, 2.08, 4694.0),
    term(11.0, 0.77, 553.57),
    term(10.0, 1.3, 6286.6),
    term(10.0, 4.24, 1349.87),
    term(9.0, 2.7, 242.73),
    term(9.0, 5.64, 951.72),
    term(8.0, 5.3, 2352.87),
    term(6.0, 2.65, 9437.76),
    term(6.0, 4.67, 4690.48),
];

const L2: [PeriodicTerm; 20] = [
    term(52919.0, 0.0, 0.0),
    term(8720.0, 1.0721, 6283.0758),
    term(309.0, 0.867, 12566.152),
    term(27.0, 0.05, 3.52),
    term(16.0, 5.19, 26.3),
    term(16.0, 3.68, 155.42),
    term(10.0, 0.76, 18849.23),
    term(9.0, 2.06, 77713.77),
    term(7.0, 0.83, 775.52),
    term(5.0, 4.66, 1577.34),
    term(4.0, 1.03, 7.11),
    term(4.0, 3.44, 5573.14),
    term(3.0, 5.14, 796.3),
    term(3.0, 6.05, 5507.55),
    term(3.0, 1.19, 242.73),
    term(3.0, 6.12, 529.69),
    term(3.0, 0.31, 398.15),
    term(3.0, 2.28, 553.57),
    term(2.0, 4.38, 5223.69),
    term(2.0, 3.75, 0.98),
];

const L3: [PeriodicTerm; 7] = [
    term(289.0, 5.844, 6283.076),
    term(35.0, 0.0, 0.0),
    term(17.0, 5.49, 12566.15),
    term(3.0, 5.2, 155.42),
    term(1.0, 4.72, 3.52),
    term(1.0, 5.3, 18849.23),
    term(1.0, 5.97, 242.73),
];

const L4: [PeriodicTerm; 3] = [
    term(114.0, 3.142, 0.0),
    term(8.0, 4.13, 6283.08),
    term(1.0, 3.84, 12566.15),
];

const L5: [PeriodicTerm; 1] = [
    term(1.0, 3.14, 0.0),
];

/// Earth heliocentric longitude terms, one bucket per power of the ephemeris millennium.
pub static L_TERMS: [&[PeriodicTerm]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];

const B0: [PeriodicTerm; 5] = [
    term(280.0, 3.199, 84334.662),
    term(102.0, 5.422, 5507.553),
    term(80.0, 3.88, 5223.69),
    term(44.0, 3.7, 2352.87),
    term(32.0, 4.0, 1577.34),
];

const B1: [PeriodicTerm; 2] = [
    term(9.0, 3.9, 5507.55),
    term(6.0, 1.73, 5223.69),
];

/// Earth heliocentric latitude terms.
pub static B_TERMS: [&[PeriodicTerm]; 2] = [&B0, &B1];

const R0: [PeriodicTerm; 40] = [
    term(100013989.0, 0.0, 0.0),
    term(1670700.0, 3.0984635, 6283.07585),
    term(13956.0, 3.05525, 12566.1517),
    term(3084.0, 5.1985, 77713.7715),
    term(1628.0, 1.1739, 5753.3849),
    term(1576.0, 2.8469, 7860.4194),
    term(925.0, 5.453, 11506.77),
    term(542.0, 4.564, 3930.21),
    term(472.0, 3.661, 5884.927),
    term(346.0, 0.964, 5507.553),
    term(329.0, 5.9, 5223.694),
    term(307.0, 0.299, 5573.143),
    term(243.0, 4.273, 11790.629),
    term(212.0, 5.847, 1577.344),
    term(186.0, 5.022, 10977.079),
    term(175.0, 3.012, 18849.228),
    term(110.0, 5.055, 5486.778),
    term(98.0, 0.89, 6069.78),
    term(86.0, 5.69, 15720.84),
    term(86.0, 1.27, 161000.69),
    term(65.0, 0.27, 17260.15),
    term(63.0, 0.92, 529.69),
    term(57.0, 2.01, 83996.85),
    term(56.0, 5.24, 71430.7),
    term(49.0, 3.25, 2544.31),
    term(47.0, 2.58, 775.52),
    term(45.0, 5.54, 9437.76),
    term(43.0, 6.01, 6275.96),
    term(39.0, 5.36, 4694.0),
    term(38.0, 2.39, 8827.39),
    term(37.0, 0.83, 19651.05),
    term(37.0, 4.9, 12139.55),
    term(36.0, 1.67, 12036.46),
    term(35.0, 1.84, 2942.46),
    term(33.0, 0.24, 7084.9),
    term(32.0, 0.18, 5088.63),
    term(32.0, 1.78, 398.15),
    term(28.0, 1.21, 6286.6),
    term(28.0, 1.9, 6279.55),
    term(26.0, 4.59, 10447.39),
];

const R1: [PeriodicTerm; 10] = [
    term(103019.0, 1.10749, 6283.07585),
    term(1721.0, 1.0644, 12566.1517),
    term(702.0, 3.142, 0.0),
    term(32.0, 1.02, 18849.23),
    term(31.0, 2.84, 5507.55),
    term(25.0, 1.32, 5223.69),
    term(18.0, 1.42, 1577.34),
    term(10.0, 5.91, 10977.08),
    term(9.0, 1.42, 6275.96),
    term(9.0, 0.27, 5486.78),
];

const R2: [PeriodicTerm; 6] = [
    term(4359.0, 5.7846, 6283.0758),
    term(124.0, 5.579, 12566.152),
    term(12.0, 3.14, 0.0),
    term(9.0, 3.63, 77713.77),
    term(6.0, 1.87, 5573.14),
    term(3.0, 5.47, 18849.23),
];

const R3: [PeriodicTerm; 2] = [
    term(145.0, 4.273, 6283.076),
    term(7.0, 3.92, 12566.15),
];

const R4: [PeriodicTerm; 1] = [
    term(4.0, 2.56, 6283.08),
];

/// Earth radius vector terms.
pub static R_TERMS: [&[PeriodicTerm]; 5] = [&R0, &R1, &R2, &R3, &R4];

/// Nutation series: multipliers of the five fundamental arguments paired with the
/// longitude (ψ) and obliquity (ε) coefficients, in units of 0.0001 arcseconds.
pub static NUTATION_TERMS: [NutationTerm; 63] = [
    nutation([0, 0, 0, 0, 1], [-171996.0, -174.2, 92025.0, 8.9]),
    nutation([-2, 0, 0, 2, 2], [-13187.0, -1.6, 5736.0, -3.1]),
    nutation([0, 0, 0, 2, 2], [-2274.0, -0.2, 977.0, -0.5]),
    nutation([0, 0, 0, 0, 2], [2062.0, 0.2, -895.0, 0.5]),
    nutation([0, 1, 0, 0, 0], [1426.0, -3.4, 54.0, -0.1]),
    nutation([0, 0, 1, 0, 0], [712.0, 0.1, -7.0, 0.0]),
    nutation([-2, 1, 0, 2, 2], [-517.0, 1.2, 224.0, -0.6]),
    nutation([0, 0, 0, 2, 1], [-386.0, -0.4, 200.0, 0.0]),
    nutation([0, 0, 1, 2, 2], [-301.0, 0.0, 129.0, -0.1]),
    nutation([-2, -1, 0, 2, 2], [217.0, -0.5, -95.0, 0.3]),
    nutation([-2, 0, 1, 0, 0], [-158.0, 0.0, 0.0, 0.0]),
    nutation([-2, 0, 0, 2, 1], [129.0, 0.1, -70.0, 0.0]),
    nutation([0, 0, -1, 2, 2], [123.0, 0.0, -53.0, 0.0]),
    nutation([2, 0, 0, 0, 0], [63.0, 0.0, 0.0, 0.0]),
    nutation([0, 0, 1, 0, 1], [63.0, 0.1, -33.0, 0.0]),
    nutation([2, 0, -1, 2, 2], [-59.0, 0.0, 26.0, 0.0]),
    nutation([0, 0, -1, 0, 1], [-58.0, -0.1, 32.0, 0.0]),
    nutation([0, 0, 1, 2, 1], [-51.0, 0.0, 27.0, 0.0]),
    nutation([-2, 0, 2, 0, 0], [48.0, 0.0, 0.0, 0.0]),
    nutation([0, 0, -2, 2, 1], [46.0, 0.0, -24.0, 0.0]),
    nutation([2, 0, 0, 2, 2], [-38.0, 0.0, 16.0, 0.0]),
    nutation([0, 0, 2, 2, 2], [-31.0, 0.0, 13.0, 0.0]),
    nutation([0, 0, 2, 0, 0], [29.0, 0.0, 0.0, 0.0]),
    nutation([-2, 0, 1, 2, 2], [29.0, 0.0, -12.0, 0.0]),
    nutation([0, 0, 0, 2, 0], [26.0, 0.0, 0.0, 0.0]),
    nutation([-2, 0, 0, 2, 0], [-22.0, 0.0, 0.0, 0.0]),
    nutation([0, 0, -1, 2, 1], [21.0, 0.0, -10.0, 0.0]),
    nutation([0, 2, 0, 0, 0], [17.0, -0.1, 0.0, 0.0]),
    nutation([2, 0, -1, 0, 1], [16.0, 0.0, -8.0, 0.0]),
    nutation([-2, 2, 0, 2, 2], [-16.0, 0.1, 7.0, 0.0]),
    nutation([0, 1, 0, 0, 1], [-15.0, 0.0, 9.0, 0.0]),
    nutation([-2, 0, 1, 0, 1], [-13.0, 0.0, 7.0, 0.0]),
    nutation([0, -1, 0, 0, 1], [-12.0, 0.0, 6.0, 0.0]),
    nutation([0, 0, 2, -2, 0], [11.0, 0.0, 0.0, 0.0]),
    nutation([2, 0, -1, 2, 1], [-10.0, 0.0, 5.0, 0.0]),
    nutation([2, 0, 1, 2, 2], [-8.0, 0.0, 3.0, 0.0]),
    nutation([0, 1, 0, 2, 2], [7.0, 0.0, -3.0, 0.0]),
    nutation([-2, 1, 1, 0, 0], [-7.0, 0.0, 0.0, 0.0]),
    nutation([0, -1, 0, 2, 2], [-7.0, 0.0, 3.0, 0.0]),
    nutation([2, 0, 0, 2, 1], [-7.0, 0.0, 3.0, 0.0]),
    nutation([2, 0, 1, 0, 0], [6.0, 0.0, 0.0, 0.0]),
    nutation([-2, 0, 2, 2, 2], [6.0, 0.0, -3.0, 0.0]),
    nutation([-2, 0, 1, 2, 1], [6.0, 0.0, -3.0, 0.0]),
    nutation([2, 0, -2, 0, 1], [-6.0, 0.0, 3.0, 0.0]),
    nutation([2, 0, 0, 0, 1], [-6.0, 0.0, 3.0, 0.0]),
    nutation([0, -1, 1, 0, 0], [5.0, 0.0, 0.0, 0.0]),
    nutation([-2, -1, 0, 2, 1], [-5.0, 0.0, 3.0, 0.0]),
    nutation([-2, 0, 0, 0, 1], [-5.0, 0.0, 3.0, 0.0]),
    nutation([0, 0, 2, 2, 1], [-5.0, 0.0, 3.0, 0.0]),
    nutation([-2, 0, 2, 0, 1], [4.0, 0.0, 0.0, 0.0]),
    nutation([-2, 1, 0, 2, 1], [4.0, 0.0, 0.0, 0.0]),
    nutation([0, 0, 1, -2, 0], [4.0, 0.0, 0.0, 0.0]),
    nutation([-1, 0, 1, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    nutation([-2, 1, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    nutation([1, 0, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    nutation([0, 0, 1, 2, 0], [3.0, 0.0, 0.0, 0.0]),
    nutation([0, 0, -2, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
    nutation([-1, -1, 1, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    nutation([0, 1, 1, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    nutation([0, -1, 1, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
    nutation([2, -1, -1, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
    nutation([0, 0, 3, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
    nutation([2, -1, 0, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_sizes_match_published_series() {
        assert_eq!(L_TERMS.map(<[PeriodicTerm]>::len), [64, 34, 20, 7, 3, 1]);
        assert_eq!(B_TERMS.map(<[PeriodicTerm]>::len), [5, 2]);
        assert_eq!(R_TERMS.map(<[PeriodicTerm]>::len), [40, 10, 6, 2, 1]);
        assert_eq!(NUTATION_TERMS.len(), 63);
    }

    #[test]
    fn leading_terms() {
        assert_eq!(L_TERMS[0][0], term(175_347_046.0, 0.0, 0.0));
        assert_eq!(R_TERMS[0][0], term(100_013_989.0, 0.0, 0.0));
        assert_eq!(NUTATION_TERMS[0].multipliers, [0, 0, 0, 0, 1]);
        assert_eq!(NUTATION_TERMS[0].longitude, [-171_996.0, -174.2]);
        assert_eq!(NUTATION_TERMS[0].obliquity, [92_025.0, 8.9]);
    }
}
