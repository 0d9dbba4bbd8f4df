//! Reference coefficient data for tests.
//!
//! The same records ship as YAML with the service layer's bundled store.
//!
//! NASA9 values are from the NASA Glenn database (McBride, Zehe & Gordon,
//! 2002); NASA7 values are GRI-Mech 3.0 (the 1000–3500 K fit is filed under
//! the 1000–6000 K window).

use crate::component::{Component, ComponentKey, Phase};
use crate::polynomial::{
    CoefficientRecord, PolynomialCoefficients, PolynomialType, RangeTag, TemperatureWindow,
};
use crate::store::InMemoryStore;

pub const MW_H2: f64 = 2.015_88;
pub const MW_O2: f64 = 31.998_8;
pub const MW_H2O: f64 = 18.015_28;
pub const MW_CH4: f64 = 16.042_46;
pub const MW_CO: f64 = 28.010_1;
pub const MW_CO2: f64 = 44.009_5;

pub const H2_NASA9_LOW: PolynomialCoefficients = PolynomialCoefficients::Nasa9 {
    a: [
        4.078_323_210e4,
        -8.009_186_040e2,
        8.214_702_010,
        -1.269_714_457e-2,
        1.753_605_076e-5,
        -1.202_860_270e-8,
        3.368_093_490e-12,
    ],
    b1: 2.682_484_665e3,
    b2: -3.043_788_844e1,
};

pub const H2_NASA9_MID: PolynomialCoefficients = PolynomialCoefficients::Nasa9 {
    a: [
        5.608_128_010e5,
        -8.371_504_740e2,
        2.975_364_532,
        1.252_249_124e-3,
        -3.740_716_190e-7,
        5.936_625_200e-11,
        -3.606_994_100e-15,
    ],
    b1: 5.339_824_410e3,
    b2: -2.202_774_769,
};

pub const H2_NASA9_HIGH: PolynomialCoefficients = PolynomialCoefficients::Nasa9 {
    a: [
        4.966_884_120e8,
        -3.147_547_149e5,
        7.984_121_880e1,
        -8.414_789_210e-3,
        4.753_248_350e-7,
        -1.371_873_492e-11,
        1.605_461_756e-16,
    ],
    b1: 2.488_433_516e6,
    b2: -6.695_728_110e2,
};

pub const O2_NASA9_LOW: PolynomialCoefficients = PolynomialCoefficients::Nasa9 {
    a: [
        -3.425_563_420e4,
        4.847_000_970e2,
        1.119_010_961,
        4.293_889_240e-3,
        -6.836_300_520e-7,
        -2.023_372_700e-9,
        1.039_040_018e-12,
    ],
    b1: -3.391_454_870e3,
    b2: 1.849_699_470e1,
};

pub const O2_NASA9_MID: PolynomialCoefficients = PolynomialCoefficients::Nasa9 {
    a: [
        -1.037_939_022e6,
        2.344_830_282e3,
        1.819_732_036,
        1.267_847_582e-3,
        -2.188_067_988e-7,
        2.053_719_572e-11,
        -8.193_467_050e-16,
    ],
    b1: -1.689_010_929e4,
    b2: 1.738_716_506e1,
};

pub const O2_NASA9_HIGH: PolynomialCoefficients = PolynomialCoefficients::Nasa9 {
    a: [
        4.975_294_300e8,
        -2.866_106_874e5,
        6.690_352_250e1,
        -6.169_959_020e-3,
        3.016_396_027e-7,
        -7.421_416_600e-12,
        7.278_175_770e-17,
    ],
    b1: 2.293_554_027e6,
    b2: -5.530_621_610e2,
};

pub const H2O_NASA9_LOW: PolynomialCoefficients = PolynomialCoefficients::Nasa9 {
    a: [
        -3.947_960_830e4,
        5.755_731_020e2,
        9.317_826_530e-1,
        7.222_712_860e-3,
        -7.342_557_370e-6,
        4.955_043_490e-9,
        -1.336_933_246e-12,
    ],
    b1: -3.303_974_310e4,
    b2: 1.724_205_775e1,
};

pub const H2O_NASA9_MID: PolynomialCoefficients = PolynomialCoefficients::Nasa9 {
    a: [
        1.034_972_096e6,
        -2.412_698_562e3,
        4.646_110_780,
        2.291_998_307e-3,
        -6.836_830_480e-7,
        9.426_468_930e-11,
        -4.822_380_530e-15,
    ],
    b1: -1.384_286_509e4,
    b2: -7.978_148_510,
};

pub const H2_NASA7_LOW: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        2.344_331_12,
        7.980_520_75e-3,
        -1.947_815_10e-5,
        2.015_720_94e-8,
        -7.376_117_61e-12,
        -9.179_351_73e2,
        6.830_102_38e-1,
    ],
};

pub const H2_NASA7_MID: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        3.337_279_20,
        -4.940_247_31e-5,
        4.994_567_78e-7,
        -1.795_663_94e-10,
        2.002_553_76e-14,
        -9.501_589_22e2,
        -3.205_023_31,
    ],
};

pub const O2_NASA7_LOW: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        3.782_456_36,
        -2.996_734_16e-3,
        9.847_302_01e-6,
        -9.681_295_09e-9,
        3.243_728_37e-12,
        -1.063_943_56e3,
        3.657_675_73,
    ],
};

pub const O2_NASA7_MID: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        3.282_537_84,
        1.483_087_54e-3,
        -7.579_666_69e-7,
        2.094_705_55e-10,
        -2.167_177_94e-14,
        -1.088_457_72e3,
        5.453_231_29,
    ],
};

pub const H2O_NASA7_LOW: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        4.198_640_56,
        -2.036_434_10e-3,
        6.520_402_11e-6,
        -5.487_970_62e-9,
        1.771_978_17e-12,
        -3.029_372_67e4,
        -8.490_322_08e-1,
    ],
};

pub const H2O_NASA7_MID: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        3.033_992_49,
        2.176_918_04e-3,
        -1.640_725_18e-7,
        -9.704_198_70e-11,
        1.682_009_92e-14,
        -3.000_429_71e4,
        4.966_770_10,
    ],
};

pub const CH4_NASA7_LOW: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        5.149_876_13,
        -1.367_097_88e-2,
        4.918_005_99e-5,
        -4.847_430_26e-8,
        1.666_939_56e-11,
        -1.024_664_76e4,
        -4.641_303_76,
    ],
};

pub const CH4_NASA7_MID: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        7.485_149_50e-2,
        1.339_094_67e-2,
        -5.732_858_09e-6,
        1.222_925_35e-9,
        -1.018_152_30e-13,
        -9.468_344_59e3,
        1.843_731_80e1,
    ],
};

pub const CO_NASA7_LOW: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        3.579_533_47,
        -6.103_536_80e-4,
        1.016_814_33e-6,
        9.070_058_84e-10,
        -9.044_244_99e-13,
        -1.434_408_60e4,
        3.508_409_28,
    ],
};

pub const CO_NASA7_MID: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        2.715_185_61,
        2.062_527_43e-3,
        -9.988_257_71e-7,
        2.300_530_08e-10,
        -2.036_477_16e-14,
        -1.415_187_24e4,
        7.818_687_72,
    ],
};

pub const CO2_NASA7_LOW: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        2.356_773_52,
        8.984_596_77e-3,
        -7.123_562_69e-6,
        2.459_190_22e-9,
        -1.436_995_48e-13,
        -4.837_196_97e4,
        9.901_052_22,
    ],
};

pub const CO2_NASA7_MID: PolynomialCoefficients = PolynomialCoefficients::Nasa7 {
    a: [
        3.857_460_29,
        4.414_370_26e-3,
        -2.214_814_04e-6,
        5.234_901_88e-10,
        -4.720_841_64e-14,
        -4.875_916_60e4,
        2.271_638_06,
    ],
};

pub fn hydrogen() -> Component {
    Component::new("hydrogen", "H2", Phase::Gas)
}

pub fn oxygen() -> Component {
    Component::new("oxygen", "O2", Phase::Gas)
}

pub fn water() -> Component {
    Component::new("water", "H2O", Phase::Gas)
}

pub fn methane() -> Component {
    Component::new("methane", "CH4", Phase::Gas)
}

pub fn carbon_monoxide() -> Component {
    Component::new("carbon monoxide", "CO", Phase::Gas)
}

pub fn carbon_dioxide() -> Component {
    Component::new("carbon dioxide", "CO2", Phase::Gas)
}

/// Every fixture component.
pub fn components() -> Vec<Component> {
    vec![
        hydrogen(),
        oxygen(),
        water(),
        methane(),
        carbon_monoxide(),
        carbon_dioxide(),
    ]
}

fn record(c: PolynomialCoefficients, mw: f64) -> CoefficientRecord {
    match c {
        PolynomialCoefficients::Nasa7 { a } => CoefficientRecord::nasa7(a, mw),
        PolynomialCoefficients::Nasa9 { a, b1, b2 } => CoefficientRecord::nasa9(a, b1, b2, mw),
    }
}

/// Store keyed by `Formula-State` ids.
pub fn store() -> InMemoryStore {
    store_for(ComponentKey::FormulaState)
}

/// Store holding every fixture record under `key`.
pub fn store_for(key: ComponentKey) -> InMemoryStore {
    use PolynomialType::{Nasa7, Nasa9};
    use TemperatureWindow::{High, Low, Mid};

    let entries: [(Component, f64, Vec<(PolynomialType, TemperatureWindow, PolynomialCoefficients)>); 6] = [
        (
            hydrogen(),
            MW_H2,
            vec![
                (Nasa9, Low, H2_NASA9_LOW),
                (Nasa9, Mid, H2_NASA9_MID),
                (Nasa9, High, H2_NASA9_HIGH),
                (Nasa7, Low, H2_NASA7_LOW),
                (Nasa7, Mid, H2_NASA7_MID),
            ],
        ),
        (
            oxygen(),
            MW_O2,
            vec![
                (Nasa9, Low, O2_NASA9_LOW),
                (Nasa9, Mid, O2_NASA9_MID),
                (Nasa9, High, O2_NASA9_HIGH),
                (Nasa7, Low, O2_NASA7_LOW),
                (Nasa7, Mid, O2_NASA7_MID),
            ],
        ),
        (
            water(),
            MW_H2O,
            vec![
                (Nasa9, Low, H2O_NASA9_LOW),
                (Nasa9, Mid, H2O_NASA9_MID),
                (Nasa7, Low, H2O_NASA7_LOW),
                (Nasa7, Mid, H2O_NASA7_MID),
            ],
        ),
        (
            methane(),
            MW_CH4,
            vec![(Nasa7, Low, CH4_NASA7_LOW), (Nasa7, Mid, CH4_NASA7_MID)],
        ),
        (
            carbon_monoxide(),
            MW_CO,
            vec![(Nasa7, Low, CO_NASA7_LOW), (Nasa7, Mid, CO_NASA7_MID)],
        ),
        (
            carbon_dioxide(),
            MW_CO2,
            vec![(Nasa7, Low, CO2_NASA7_LOW), (Nasa7, Mid, CO2_NASA7_MID)],
        ),
    ];

    let mut store = InMemoryStore::new();
    for (component, mw, ranges) in entries {
        let id = component.id(key);
        for (poly, window, coefficients) in ranges {
            store.insert(&id, RangeTag::new(poly, window), record(coefficients, mw));
        }
    }
    store
}
