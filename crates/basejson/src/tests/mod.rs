mod arbitrary;

mod serde_oracle;
