use crate::model::N_PARAMETERS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SampleOil {
    SampleA,
    SampleB,
    SampleC,
}

#[derive(Debug, Clone, Copy)]
pub struct SampleOilDef {
    pub preset: SampleOil,
    pub name: &'static str,
    pub values: [f64; N_PARAMETERS],
}

const SAMPLE_OILS: &[SampleOilDef] = &[
    SampleOilDef {
        preset: SampleOil::SampleA,
        name: "Sample Oil A",
        values: [2.5, 3.1, 1.8, 4.2, 2.9, 3.7, 2.1, 3.5, 2.8, 3.3],
    },
    SampleOilDef {
        preset: SampleOil::SampleB,
        name: "Sample Oil B",
        values: [4.1, 2.7, 3.9, 2.3, 4.5, 2.8, 3.6, 2.9, 4.1, 2.5],
    },
    SampleOilDef {
        preset: SampleOil::SampleC,
        name: "Sample Oil C",
        values: [1.9, 4.3, 2.6, 3.8, 2.1, 4.2, 3.1, 2.7, 3.4, 4.0],
    },
];

pub fn sample_oils() -> &'static [SampleOilDef] {
    SAMPLE_OILS
}

impl SampleOil {
    pub fn def(self) -> &'static SampleOilDef {
        match self {
            SampleOil::SampleA => &SAMPLE_OILS[0],
            SampleOil::SampleB => &SAMPLE_OILS[1],
            SampleOil::SampleC => &SAMPLE_OILS[2],
        }
    }

    pub fn values(self) -> Vec<f64> {
        self.def().values.to_vec()
    }
}
