pub mod asrm;
pub mod audit_c;
pub mod bpi;
pub mod cssrs;
pub mod dast10;
pub mod diagnosis_selection;
pub mod gad7;
pub mod isi;
pub mod opioid_screen;
pub mod phq4;
pub mod phq9;
pub mod prime5;
pub mod ptsd5;
pub mod screening_concerns;
