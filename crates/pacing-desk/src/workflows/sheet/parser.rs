use crate::workflows::allocation::AllocationInput;
use std::io::Read;

pub(crate) fn first_row<R: Read>(reader: R) -> Result<Option<AllocationInput>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<AllocationInput>().next().transpose()
}
