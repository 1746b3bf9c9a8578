//! Tabulated spectral data sampled every 10nm from 340nm to 830nm.

use crate::{
    color::Component,
    tags::{Illuminant, Observer},
};

/// Number of spectral sample points.
pub const SAMPLE_COUNT: usize = 50;

/// The first sample point in nanometers.
pub const FIRST_WAVELENGTH: u32 = 340;

/// Distance between sample points in nanometers.
pub const WAVELENGTH_STEP: u32 = 10;

/// CIE 1931 2° color matching functions, x̄ ȳ z̄ per sample point.
#[rustfmt::skip]
pub const CMF_2: [[Component; 3]; SAMPLE_COUNT] = [
    [0.0, 0.0, 0.0], // 340
    [0.0, 0.0, 0.0], // 350
    [0.0001299, 0.000003917, 0.0006061], // 360
    [0.0004149, 0.00001239, 0.001946], // 370
    [0.001368, 0.000039, 0.00645], // 380
    [0.004243, 0.00012, 0.02005], // 390
    [0.01431, 0.000396, 0.06785], // 400
    [0.04351, 0.00121, 0.2074], // 410
    [0.13438, 0.004, 0.6456], // 420
    [0.2839, 0.0116, 1.3856], // 430
    [0.34828, 0.023, 1.74706], // 440
    [0.3362, 0.038, 1.77211], // 450
    [0.2908, 0.06, 1.6692], // 460
    [0.19536, 0.09098, 1.28764], // 470
    [0.09564, 0.13902, 0.81295], // 480
    [0.03201, 0.20802, 0.46518], // 490
    [0.0049, 0.323, 0.272], // 500
    [0.0093, 0.503, 0.1582], // 510
    [0.06327, 0.71, 0.07825], // 520
    [0.1655, 0.862, 0.04216], // 530
    [0.2904, 0.954, 0.0203], // 540
    [0.43345, 0.99495, 0.00875], // 550
    [0.5945, 0.995, 0.0039], // 560
    [0.7621, 0.952, 0.0021], // 570
    [0.9163, 0.87, 0.00165], // 580
    [1.0263, 0.757, 0.0011], // 590
    [1.0622, 0.631, 0.0008], // 600
    [1.0026, 0.503, 0.00034], // 610
    [0.85445, 0.381, 0.00019], // 620
    [0.6424, 0.265, 0.00005], // 630
    [0.4479, 0.175, 0.00002], // 640
    [0.2835, 0.107, 0.0], // 650
    [0.1649, 0.061, 0.0], // 660
    [0.0874, 0.032, 0.0], // 670
    [0.04677, 0.017, 0.0], // 680
    [0.0227, 0.00821, 0.0], // 690
    [0.011359, 0.004102, 0.0], // 700
    [0.00579, 0.002091, 0.0], // 710
    [0.002899, 0.001047, 0.0], // 720
    [0.00144, 0.00052, 0.0], // 730
    [0.00069, 0.000249, 0.0], // 740
    [0.000332, 0.00012, 0.0], // 750
    [0.000166, 0.00006, 0.0], // 760
    [0.000083, 0.00003, 0.0], // 770
    [0.000042, 0.000015, 0.0], // 780
    [0.0, 0.0, 0.0], // 790
    [0.0, 0.0, 0.0], // 800
    [0.0, 0.0, 0.0], // 810
    [0.0, 0.0, 0.0], // 820
    [0.0, 0.0, 0.0], // 830
];

/// CIE 1964 10° color matching functions, x̄ ȳ z̄ per sample point.
#[rustfmt::skip]
pub const CMF_10: [[Component; 3]; SAMPLE_COUNT] = [
    [0.0, 0.0, 0.0], // 340
    [0.0, 0.0, 0.0], // 350
    [0.0000001222, 0.000000013398, 0.000000535], // 360
    [0.000005959, 0.000000651, 0.00002616], // 370
    [0.00016, 0.000017, 0.000705], // 380
    [0.002362, 0.000253, 0.010482], // 390
    [0.01911, 0.002004, 0.086011], // 400
    [0.084736, 0.008756, 0.389366], // 410
    [0.204492, 0.021391, 0.972542], // 420
    [0.314679, 0.038676, 1.55348], // 430
    [0.383734, 0.062077, 1.96728], // 440
    [0.370702, 0.089456, 1.9948], // 450
    [0.302273, 0.128201, 1.74537], // 460
    [0.195618, 0.18519, 1.31756], // 470
    [0.080507, 0.253589, 0.772125], // 480
    [0.016172, 0.339133, 0.415254], // 490
    [0.003816, 0.460777, 0.218502], // 500
    [0.037465, 0.606741, 0.112044], // 510
    [0.117749, 0.761757, 0.060709], // 520
    [0.236491, 0.875211, 0.030451], // 530
    [0.376772, 0.961988, 0.013676], // 540
    [0.529826, 0.991761, 0.003988], // 550
    [0.705224, 0.99734, 0.0], // 560
    [0.878655, 0.955552, 0.0], // 570
    [1.01416, 0.868934, 0.0], // 580
    [1.11852, 0.777405, 0.0], // 590
    [1.12399, 0.658341, 0.0], // 600
    [1.03048, 0.527963, 0.0], // 610
    [0.856297, 0.398057, 0.0], // 620
    [0.647467, 0.283493, 0.0], // 630
    [0.431567, 0.179828, 0.0], // 640
    [0.268329, 0.107633, 0.0], // 650
    [0.152568, 0.060281, 0.0], // 660
    [0.081261, 0.0318, 0.0], // 670
    [0.040851, 0.015905, 0.0], // 680
    [0.019941, 0.007749, 0.0], // 690
    [0.009577, 0.003718, 0.0], // 700
    [0.004553, 0.001768, 0.0], // 710
    [0.002175, 0.000846, 0.0], // 720
    [0.001045, 0.000407, 0.0], // 730
    [0.000508, 0.000199, 0.0], // 740
    [0.000251, 0.000098, 0.0], // 750
    [0.000126, 0.00005, 0.0], // 760
    [0.000065, 0.000025, 0.0], // 770
    [0.000033, 0.000013, 0.0], // 780
    [0.0, 0.0, 0.0], // 790
    [0.0, 0.0, 0.0], // 800
    [0.0, 0.0, 0.0], // 810
    [0.0, 0.0, 0.0], // 820
    [0.0, 0.0, 0.0], // 830
];

/// Relative spectral power of CIE illuminant D65.
#[rustfmt::skip]
pub const SPD_D65: [Component; SAMPLE_COUNT] = [
    39.9488, 44.9117, 46.6383, 52.0891, 49.9755, // 340
    54.6482, 82.7549, 91.486, 93.4318, 86.6823, // 390
    104.865, 117.008, 117.812, 114.861, 115.923, // 440
    108.811, 109.354, 107.802, 104.79, 107.689, // 490
    104.405, 104.046, 100.0, 96.3342, 95.788, // 540
    88.6856, 90.0062, 89.5991, 87.6987, 83.2886, // 590
    83.6992, 80.0268, 80.2146, 82.2778, 78.2842, // 640
    69.7213, 71.6091, 74.349, 61.604, 69.8856, // 690
    75.087, 63.5927, 46.4182, 66.8054, 63.3828, // 740
    64.304, 59.4519, 51.959, 57.4406, 60.3125, // 790
];

/// Relative spectral power of CIE illuminant D50.
#[rustfmt::skip]
pub const SPD_D50: [Component; SAMPLE_COUNT] = [
    17.92, 20.98, 23.91, 25.89, 24.45, // 340
    29.83, 49.25, 56.45, 59.97, 57.76, // 390
    74.77, 87.19, 90.56, 91.32, 95.07, // 440
    91.93, 95.7, 96.59, 97.11, 102.09, // 490
    100.75, 102.31, 100.0, 97.74, 98.92, // 540
    93.51, 97.71, 99.29, 99.07, 95.75, // 590
    98.9, 95.71, 98.24, 103.06, 99.19, // 640
    87.43, 91.66, 92.94, 76.89, 86.56, // 690
    92.63, 78.27, 57.72, 82.97, 78.31, // 740
    79.59, 73.44, 63.95, 70.4, 74.44, // 790
];

/// The wavelength in nanometers of the sample at `index`.
pub const fn wavelength(index: usize) -> u32 {
    FIRST_WAVELENGTH + WAVELENGTH_STEP * index as u32
}

/// The sample index of a wavelength, if it is one of the sample points.
pub fn index_of(wavelength: u32) -> Option<usize> {
    if wavelength < FIRST_WAVELENGTH || (wavelength - FIRST_WAVELENGTH) % WAVELENGTH_STEP != 0 {
        return None;
    }
    let index = ((wavelength - FIRST_WAVELENGTH) / WAVELENGTH_STEP) as usize;
    (index < SAMPLE_COUNT).then_some(index)
}

/// Color matching functions of the observer.
pub fn color_matching(observer: Observer) -> &'static [[Component; 3]; SAMPLE_COUNT] {
    match observer {
        Observer::Two => &CMF_2,
        Observer::Ten => &CMF_10,
    }
}

/// Relative spectral power of illuminant A, from Planck's law at 2848K
/// normalised to 100 at 560nm.
fn illuminant_a() -> [Component; SAMPLE_COUNT] {
    const C2: Component = 1.435e7;
    const T: Component = 2848.0;

    let denominator = (C2 / (T * 560.0)).exp() - 1.0;
    std::array::from_fn(|i| {
        let nm = wavelength(i) as Component;
        100.0 * (560.0 / nm).powi(5) * denominator / ((C2 / (T * nm)).exp() - 1.0)
    })
}

/// The spectral power distribution of an illuminant, for the illuminants that
/// have one tabulated.
pub fn reference_illuminant(illuminant: Illuminant) -> Option<[Component; SAMPLE_COUNT]> {
    match illuminant {
        Illuminant::D50 => Some(SPD_D50),
        Illuminant::D65 => Some(SPD_D65),
        Illuminant::A => Some(illuminant_a()),
        Illuminant::E => Some([100.0; SAMPLE_COUNT]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn wavelength_index_mapping() {
        assert_eq!(wavelength(0), 340);
        assert_eq!(wavelength(SAMPLE_COUNT - 1), 830);
        assert_eq!(index_of(340), Some(0));
        assert_eq!(index_of(560), Some(22));
        assert_eq!(index_of(830), Some(49));
        assert_eq!(index_of(840), None);
        assert_eq!(index_of(335), None);
        assert_eq!(index_of(555), None);
    }

    #[test]
    fn illuminant_a_is_normalised_at_560() {
        let a = reference_illuminant(Illuminant::A).unwrap();
        assert_component_eq!(a[22], 100.0);
        // Tungsten rises towards the red end.
        assert!(a[0] < a[22] && a[22] < a[49]);
    }

    #[test]
    fn tabulated_illuminants() {
        assert_eq!(reference_illuminant(Illuminant::D65).unwrap()[22], 100.0);
        assert_eq!(reference_illuminant(Illuminant::E).unwrap(), [100.0; SAMPLE_COUNT]);
        assert!(reference_illuminant(Illuminant::F2).is_none());
    }

    #[test]
    fn luminosity_peaks_near_555() {
        let peak = CMF_2
            .iter()
            .enumerate()
            .max_by(|a, b| a.1[1].total_cmp(&b.1[1]))
            .map(|(i, _)| wavelength(i));
        assert_eq!(peak, Some(560));
    }
}
