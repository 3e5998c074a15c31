use super::node::UnseenValuePolicy;
use std::error::Error;

/// Minimum information gain a split needs when no other threshold is set.
pub const DEFAULT_EPSILON: f64 = 0.001;

#[derive(Clone, Debug)]
pub struct Id3Params {
    pub class_num: usize,
    pub epsilon: f64,
    pub unseen_value_policy: UnseenValuePolicy,
}

impl Id3Params {
    pub fn new(class_num: usize) -> Result<Self, Box<dyn Error>> {
        let mut params = Self {
            class_num: 1,
            epsilon: DEFAULT_EPSILON,
            unseen_value_policy: UnseenValuePolicy::default(),
        };
        params.set_class_num(class_num)?;
        Ok(params)
    }

    pub fn set_class_num(&mut self, class_num: usize) -> Result<(), Box<dyn Error>> {
        if class_num < 1 {
            return Err("The number of classes must be greater than 0.".into());
        }
        self.class_num = class_num;
        Ok(())
    }

    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<(), Box<dyn Error>> {
        if epsilon.is_nan() || epsilon < 0.0 {
            return Err("The information gain threshold must be a non-negative number.".into());
        }
        self.epsilon = epsilon;
        Ok(())
    }

    pub fn set_unseen_value_policy(&mut self, policy: UnseenValuePolicy) {
        self.unseen_value_policy = policy;
    }

    pub fn class_num(&self) -> usize {
        self.class_num
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn unseen_value_policy(&self) -> UnseenValuePolicy {
        self.unseen_value_policy
    }
}
