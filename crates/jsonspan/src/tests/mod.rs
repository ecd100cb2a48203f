mod convert;
mod lookup;
