use serde::{Deserialize, Serialize};
use crate::structs::combination::Combination;
use crate::structs::generation_config::GenerationConfig;

/// Shared prompt fields plus one ordered candidate list per tunable parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSweepSpec {
    pub model: String,

    #[serde(default)]
    pub system_prompt: String,

    pub user_prompt: String,

    pub product: String,

    #[serde(default)]
    pub stop_sequence: Option<String>,

    pub temperatures: Vec<f32>,

    pub max_tokens_values: Vec<u32>,

    pub presence_penalties: Vec<f32>,

    pub frequency_penalties: Vec<f32>,
}

impl ParameterSweepSpec {
    /// A sweep whose every list holds exactly the value of `config`.
    pub fn single(config: &GenerationConfig) -> Self {
        Self {
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            user_prompt: config.user_prompt.clone(),
            product: config.product.clone(),
            stop_sequence: config.stop_sequence.clone(),
            temperatures: vec![config.temperature],
            max_tokens_values: vec![config.max_tokens],
            presence_penalties: vec![config.presence_penalty],
            frequency_penalties: vec![config.frequency_penalty],
        }
    }

    pub fn combination_count(&self) -> usize {
        self.temperatures.len()
            * self.max_tokens_values.len()
            * self.presence_penalties.len()
            * self.frequency_penalties.len()
    }

    /// Lazily walks the Cartesian product, temperature outermost and
    /// frequency penalty innermost, in the order the lists were supplied.
    /// Duplicate candidate values yield duplicate combinations.
    pub fn combinations(&self) -> impl Iterator<Item = Combination> + '_ {
        self.temperatures.iter().flat_map(move |&temperature| {
            self.max_tokens_values.iter().flat_map(move |&max_tokens| {
                self.presence_penalties.iter().flat_map(move |&presence_penalty| {
                    self.frequency_penalties.iter().map(move |&frequency_penalty| {
                        Combination::new(temperature, max_tokens, presence_penalty, frequency_penalty)
                    })
                })
            })
        })
    }

    pub fn config_for(&self, combination: Combination) -> GenerationConfig {
        GenerationConfig {
            model: self.model.clone(),
            system_prompt: self.system_prompt.clone(),
            user_prompt: self.user_prompt.clone(),
            product: self.product.clone(),
            temperature: combination.temperature,
            max_tokens: combination.max_tokens,
            presence_penalty: combination.presence_penalty,
            frequency_penalty: combination.frequency_penalty,
            stop_sequence: self.stop_sequence.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> ParameterSweepSpec {
        ParameterSweepSpec {
            model: "gpt-3.5-turbo".to_string(),
            system_prompt: String::new(),
            user_prompt: "Describe this:".to_string(),
            product: "Widget".to_string(),
            stop_sequence: None,
            temperatures: vec![0.0, 0.7],
            max_tokens_values: vec![50, 150],
            presence_penalties: vec![0.0],
            frequency_penalties: vec![0.0, 1.5],
        }
    }

    #[test]
    fn count_is_product_of_list_lengths() {
        let spec = spec();
        assert_eq!(spec.combination_count(), 8);
        assert_eq!(spec.combinations().count(), 8);
    }

    #[test]
    fn frequency_penalty_varies_fastest() {
        let combos: Vec<Combination> = spec().combinations().collect();

        assert_eq!(combos[0], Combination::new(0.0, 50, 0.0, 0.0));
        assert_eq!(combos[1], Combination::new(0.0, 50, 0.0, 1.5));
        assert_eq!(combos[2], Combination::new(0.0, 150, 0.0, 0.0));
        assert_eq!(combos[4], Combination::new(0.7, 50, 0.0, 0.0));
        assert_eq!(combos[7], Combination::new(0.7, 150, 0.0, 1.5));
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let mut spec = spec();
        spec.temperatures = vec![0.7, 0.7];
        spec.max_tokens_values = vec![50];
        spec.frequency_penalties = vec![0.0];

        let combos: Vec<Combination> = spec.combinations().collect();
        assert_eq!(combos.len(), 2);
        assert_eq!(combos[0], combos[1]);
    }

    #[test]
    fn empty_list_yields_no_combinations() {
        let mut spec = spec();
        spec.presence_penalties.clear();

        assert_eq!(spec.combination_count(), 0);
        assert_eq!(spec.combinations().next(), None);
    }

    #[test]
    fn single_round_trips_the_config() {
        let config = spec().config_for(Combination::new(1.2, 300, 1.5, 0.0));
        let single = ParameterSweepSpec::single(&config);

        assert_eq!(single.combination_count(), 1);
        assert_eq!(single.config_for(single.combinations().next().unwrap()), config);
    }
}
