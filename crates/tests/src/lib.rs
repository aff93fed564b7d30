

#[cfg(test)]
mod webhook_delivery_tests;
