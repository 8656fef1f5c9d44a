mod budget;
mod category;
mod entry;

pub(crate) use budget::Budget;
pub(crate) use category::Category;
pub(crate) use entry::Entry;

#[cfg(test)]
mod tests;
