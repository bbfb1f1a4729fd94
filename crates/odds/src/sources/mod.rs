pub mod betfair;
