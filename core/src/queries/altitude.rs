use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AltitudeAdvice {
    pub symptoms: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub treatment: &'static [&'static str],
    pub when_to_seek_help: &'static [&'static str],
}

pub static ALTITUDE_ADVICE: AltitudeAdvice = AltitudeAdvice {
    symptoms: &[
        "dolor de cabeza",
        "mareos",
        "fatiga",
        "dificultad para respirar",
    ],
    prevention: &[
        "Aclimatarse 1-2 días en Huaraz antes de actividades de altura",
        "Hidratarse abundantemente",
        "Evitar alcohol y cafeína en exceso",
        "Comer carbohidratos",
        "Ascender lentamente",
    ],
    treatment: &[
        "Descansar a una altitud menor",
        "Beber agua y té de coca",
        "Si empeora, descender inmediatamente",
        "Considerar oxígeno suplementario",
    ],
    when_to_seek_help: &[
        "Síntomas que empeoran después de 24 horas",
        "Dificultad extrema para respirar",
        "Confusión mental",
    ],
};

pub fn get_altitude_advice() -> &'static AltitudeAdvice {
    &ALTITUDE_ADVICE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fixed_sections() {
        let value = serde_json::to_value(get_altitude_advice()).unwrap();
        let sections: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(sections.len(), 4);
        for key in ["symptoms", "prevention", "treatment", "when_to_seek_help"] {
            assert!(value[key].as_array().is_some_and(|a| !a.is_empty()), "{key}");
        }
        assert_eq!(get_altitude_advice(), get_altitude_advice());
        assert_eq!(value["treatment"][1], "Beber agua y té de coca");
    }
}
