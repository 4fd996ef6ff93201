use approx::assert_abs_diff_eq;
use atrous_dwt::swt_step_axis;
use atrous_swt::{
    SubbandKey, SwtConfig, Wavelet, WaveletSelector, iswt, iswt2, iswtn, swt, swt2, swtn,
};
use ndarray::{Array1, Array2, ArrayD, IxDyn, array};

const NAMES: [&str; 10] = [
    "haar", "db1", "db2", "db3", "db4", "sym2", "sym3", "sym4", "coif1", "coif2",
];

fn selector(name: &str) -> WaveletSelector {
    WaveletSelector::from_name(name).unwrap()
}

fn signal(shape: &[usize]) -> ArrayD<f64> {
    let n: usize = shape.iter().product();
    ArrayD::from_shape_vec(
        IxDyn(shape),
        (0..n)
            .map(|i| (i as f64 * 0.37).sin() * 3.0 + (i as f64 * 1.1).cos() - 0.01 * i as f64)
            .collect(),
    )
    .unwrap()
}

fn assert_close(x: &ArrayD<f64>, y: &ArrayD<f64>) {
    assert_eq!(x.shape(), y.shape());
    for (u, v) in x.iter().zip(y.iter()) {
        assert_abs_diff_eq!(u, v, epsilon = 1e-9);
    }
}

// ---------------------------------------------------------------------------
// 1. golden fixtures
// ---------------------------------------------------------------------------
#[test]
fn golden_1d_db2_level_2() {
    let x = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0].into_dyn();
    let config = SwtConfig::new(selector("db2")).with_level(2);
    let levels = swt(x.view(), &config, -1).unwrap();
    assert_eq!(levels.len(), 2);
    let y = iswt(&levels, &selector("db2")).unwrap();
    assert_close(&x, &y);
}

#[test]
fn golden_4x4_db1_level_2() {
    let x = Array2::from_shape_fn((4, 4), |(i, j)| (4 * i + j + 1) as f64).into_dyn();
    let config = SwtConfig::new(selector("db1")).with_level(2);

    let levels = swt2(x.view(), &config, [-2, -1]).unwrap();
    assert_eq!(levels.len(), 2);
    let y = iswt2(&levels, &selector("db1"), [-2, -1]).unwrap();
    assert_close(&x, &y);

    let levels = swtn(x.view(), &config, None).unwrap();
    let y = iswtn(&levels, &selector("db1"), None).unwrap();
    assert_close(&x, &y);
}

// ---------------------------------------------------------------------------
// 2. every wavelet, several depths
// ---------------------------------------------------------------------------
#[test]
fn every_wavelet_round_trips_1d() {
    for name in NAMES {
        let x = signal(&[64]);
        for level in 1..=3 {
            let config = SwtConfig::new(selector(name)).with_level(level);
            let levels = swt(x.view(), &config, 0).unwrap();
            let y = iswt(&levels, &selector(name)).unwrap();
            for (i, (u, v)) in x.iter().zip(y.iter()).enumerate() {
                assert!(
                    (u - v).abs() < 1e-9,
                    "{name}, level {level}: mismatch at {i}: {u} vs {v}"
                );
            }
        }
    }
}

#[test]
fn filter_longer_than_sub_signal_round_trips() {
    // coif2 has 12 taps; at level 3 each sub-grid holds 2 samples.
    let x = signal(&[16]);
    let config = SwtConfig::new(selector("coif2")).with_level(3);
    let levels = swt(x.view(), &config, 0).unwrap();
    let y = iswt(&levels, &selector("coif2")).unwrap();
    assert_close(&x, &y);
}

#[test]
fn mixed_wavelets_over_axis_subset() {
    let x = signal(&[8, 4, 16]);
    let wavelet = WaveletSelector::from_names(&["db2", "sym4"]).unwrap();
    let config = SwtConfig::new(wavelet.clone()).with_level(2);
    let levels = swtn(x.view(), &config, Some(&[0, 2])).unwrap();
    for level in &levels {
        assert_eq!(level.n_axes(), 2);
        assert_eq!(level.shape(), &[8, 4, 16]);
    }
    let y = iswtn(&levels, &wavelet, Some(&[0, 2])).unwrap();
    assert_close(&x, &y);
}

#[test]
fn three_axes_round_trip() {
    let x = signal(&[4, 8, 4]);
    let config = SwtConfig::new(selector("sym2")).with_level(2);
    let levels = swtn(x.view(), &config, None).unwrap();
    assert_eq!(levels[0].n_bands(), 8);
    let y = iswtn(&levels, &selector("sym2"), None).unwrap();
    assert_close(&x, &y);
}

// ---------------------------------------------------------------------------
// 3. structure of the decomposition
// ---------------------------------------------------------------------------
#[test]
fn every_band_keeps_input_shape() {
    let x = signal(&[8, 16]);
    let config = SwtConfig::new(selector("db2")).with_level(3);
    let levels = swtn(x.view(), &config, None).unwrap();
    for level in &levels {
        for (_, band) in level.iter() {
            assert_eq!(band.shape(), &[8, 16]);
        }
    }
}

#[test]
fn every_level_has_all_keys() {
    let x = signal(&[8, 8, 8]);
    let config = SwtConfig::new(selector("haar")).with_level(2);
    let levels = swtn(x.view(), &config, None).unwrap();
    for level in &levels {
        let keys: Vec<String> = level.keys().map(|k| k.to_string()).collect();
        assert_eq!(
            keys,
            vec!["aaa", "aad", "ada", "add", "daa", "dad", "dda", "ddd"]
        );
        for key in SubbandKey::all(3) {
            assert!(level.get(key).is_some());
        }
    }
}

#[test]
fn levels_are_coarsest_first() {
    let w = Wavelet::from_name("db2").unwrap();
    let x = signal(&[32]);
    let config = SwtConfig::new(w.clone()).with_level(3);
    let levels = swtn(x.view(), &config, None).unwrap();
    assert_eq!(levels.len(), 3);

    // The last element is the finest level, computed from the raw input.
    let (a0, d0) = swt_step_axis(x.view(), &w, 0, 0).unwrap();
    assert_close(levels[2].approximation(), &a0);
    assert_close(levels[2].get_str("d").unwrap(), &d0);

    // The first element is the deepest level, computed from level 1's
    // approximation with dilation 4.
    let (a2, d2) = swt_step_axis(levels[1].approximation().view(), &w, 2, 0).unwrap();
    assert_close(levels[0].approximation(), &a2);
    assert_close(levels[0].get_str("d").unwrap(), &d2);
}

#[test]
fn start_level_dilates_finest_step() {
    let w = Wavelet::from_name("db2").unwrap();
    let x = signal(&[16]);
    let config = SwtConfig::new(w.clone()).with_level(2).with_start_level(1);
    let levels = swt(x.view(), &config, 0).unwrap();
    assert_eq!(levels.len(), 2);
    let (a1, d1) = swt_step_axis(x.view(), &w, 1, 0).unwrap();
    assert_close(levels[1].approximation(), &a1);
    assert_close(levels[1].detail(), &d1);
}

#[test]
fn default_level_is_maximum_feasible() {
    let x = signal(&[16]);
    let levels = swt(x.view(), &SwtConfig::new(selector("db1")), 0).unwrap();
    assert_eq!(levels.len(), 3);
}

#[test]
fn decomposition_unchanged_by_inverse() {
    let x = signal(&[8, 8]);
    let config = SwtConfig::new(selector("db2")).with_level(2);
    let levels = swtn(x.view(), &config, None).unwrap();
    let before = levels.clone();
    let _ = iswtn(&levels, &selector("db2"), None).unwrap();
    assert_eq!(levels, before);
}

#[test]
fn input_is_not_modified() {
    let x = Array1::from(vec![4.0, -1.0, 2.5, 0.0, 3.0, 7.0, -2.0, 1.0]).into_dyn();
    let copy = x.clone();
    let config = SwtConfig::new(selector("sym3")).with_level(2);
    let _ = swt(x.view(), &config, 0).unwrap();
    assert_eq!(x, copy);
}
