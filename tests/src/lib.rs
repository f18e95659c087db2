#[cfg(test)]
mod calculate;
