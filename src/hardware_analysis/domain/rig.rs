use super::{ComponentKind, HardwareComponent};
use crate::shared::error::RigError;
use serde::{Deserialize, Serialize};

/// Rig aggregate: the user's CPU/GPU/RAM triple plus any other parts
///
/// The three core slots are checked against their expected kinds by
/// [`Rig::new`]; deserialized rigs should be passed through
/// [`Rig::validate`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rig {
    pub cpu: HardwareComponent,
    pub gpu: HardwareComponent,
    pub ram: HardwareComponent,
    #[serde(default)]
    pub extras: Vec<HardwareComponent>,
}

impl Rig {
    pub fn new(
        cpu: HardwareComponent,
        gpu: HardwareComponent,
        ram: HardwareComponent,
    ) -> Result<Self, RigError> {
        let rig = Self {
            cpu,
            gpu,
            ram,
            extras: Vec::new(),
        };
        rig.validate()?;
        Ok(rig)
    }

    pub fn with_extra(mut self, component: HardwareComponent) -> Self {
        self.extras.push(component);
        self
    }

    /// Ensures each slot holds a component of the matching kind
    pub fn validate(&self) -> Result<(), RigError> {
        for (slot, component, expected) in [
            ("cpu", &self.cpu, ComponentKind::Cpu),
            ("gpu", &self.gpu, ComponentKind::Gpu),
            ("ram", &self.ram, ComponentKind::Ram),
        ] {
            if component.kind() != expected {
                return Err(RigError::InvalidComponent {
                    slot: slot.to_string(),
                    reason: format!(
                        "expected a {} but found a {} ({})",
                        expected,
                        component.kind(),
                        component.label()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Every part, core slots first
    pub fn components(&self) -> Vec<HardwareComponent> {
        let mut all = vec![self.cpu.clone(), self.gpu.clone(), self.ram.clone()];
        all.extend(self.extras.iter().cloned());
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu() -> HardwareComponent {
        HardwareComponent::new(ComponentKind::Cpu, "AMD", "Ryzen 5 5600X").with_benchmark_score(11000)
    }

    fn gpu() -> HardwareComponent {
        HardwareComponent::new(ComponentKind::Gpu, "NVIDIA", "RTX 3060").with_benchmark_score(12000)
    }

    fn ram() -> HardwareComponent {
        HardwareComponent::new(ComponentKind::Ram, "Corsair", "Vengeance").with_spec_text("16 GB")
    }

    #[test]
    fn test_new_accepts_matching_slots() {
        let rig = Rig::new(cpu(), gpu(), ram()).unwrap();
        assert_eq!(rig.components().len(), 3);
    }

    #[test]
    fn test_new_rejects_swapped_slots() {
        let err = Rig::new(gpu(), cpu(), ram()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid cpu component"));
        assert!(message.contains("expected a CPU but found a GPU"));
    }

    #[test]
    fn test_components_include_extras() {
        let board = HardwareComponent::new(ComponentKind::Motherboard, "ASUS", "B550");
        let rig = Rig::new(cpu(), gpu(), ram()).unwrap().with_extra(board);
        let all = rig.components();
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].kind(), ComponentKind::Motherboard);
    }

    #[test]
    fn test_deserialize_yaml() {
        let yaml = r#"
cpu: { kind: CPU, brand: Intel, model: Core i7-12700K, benchmark_score: 14000 }
gpu: { kind: GPU, brand: NVIDIA, model: RTX 4070, benchmark_score: 18000 }
ram: { kind: RAM, brand: Kingston, model: Fury, spec_text: "32 GB DDR5" }
"#;
        let rig: Rig = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(rig.validate().is_ok());
        assert!(rig.extras.is_empty());
        assert_eq!(rig.ram.ram_capacity_gb(), 32);
    }
}
