/// Use cases module containing application business logic orchestration
mod analyze_rig;

pub use analyze_rig::HardwareAnalysisUseCase;
