use crate::error::{AppError, AppResult, RecordError};
use crate::models::question::RawRecord;
use std::io::Read;
use std::path::Path;

/// 单行读取结果：成功的记录，或者带行号的记录错误
pub type RowResult = Result<RawRecord, RecordError>;

/// 从 CSV 文件读取全部原始记录
///
/// 文件不存在返回 `NotFound`；表头损坏返回 `CsvParseFailed`；
/// 单行反序列化失败只会变成该行的 `RecordError::Unexpected`。
pub fn load_csv_records(path: &Path) -> AppResult<Vec<RowResult>> {
    if !path.exists() {
        return Err(AppError::not_found(path.display().to_string()));
    }

    let file = std::fs::File::open(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let rows = parse_csv_records(file, &path.display().to_string())?;
    tracing::debug!("从 {} 读取 {} 行", path.display(), rows.len());
    Ok(rows)
}

/// 从任意 reader 解析 CSV 记录
pub fn parse_csv_records<R: Read>(reader: R, source_name: &str) -> AppResult<Vec<RowResult>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    // 先确认表头可读，否则整份文件不可用
    csv_reader
        .headers()
        .map_err(|e| AppError::csv_parse_failed(source_name, e))?;

    let rows = csv_reader
        .deserialize::<RawRecord>()
        .enumerate()
        .map(|(idx, row)| {
            let position = (idx + 1).to_string();
            match row {
                Ok(mut record) => {
                    // 缺少 rank 时用行号兜底
                    if record.rank.trim().is_empty() {
                        record.rank = position;
                    }
                    Ok(record)
                }
                Err(e) => Err(RecordError::Unexpected {
                    rank: position,
                    message: e.to_string(),
                }),
            }
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "rank,question,answer,difficulty,category
1,What is React and why would you use it?,\"React is a JavaScript library developed by Facebook for building user interfaces.\",Beginner,React Fundamentals
2,What is JSX?,\"JSX is a syntax extension.
It spans lines.\",,
";

    #[test]
    fn test_parse_basic_rows() {
        let rows = parse_csv_records(SAMPLE.as_bytes(), "sample").unwrap();
        assert_eq!(rows.len(), 2);

        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.rank, "1");
        assert_eq!(first.difficulty.as_deref(), Some("Beginner"));
        assert_eq!(first.category.as_deref(), Some("React Fundamentals"));

        let second = rows[1].as_ref().unwrap();
        assert!(second.answer.contains('\n'));
        assert_eq!(second.difficulty, None);
        assert_eq!(second.category, None);
    }

    #[test]
    fn test_missing_columns_default() {
        let data = "question,answer\nWhat is a hook?,A function.\n";
        let rows = parse_csv_records(data.as_bytes(), "sample").unwrap();
        let record = rows[0].as_ref().unwrap();
        assert_eq!(record.rank, "1");
        assert_eq!(record.difficulty, None);
        assert_eq!(record.category, None);
    }

    #[test]
    fn test_rank_falls_back_to_position() {
        let data = "rank,question,answer\n,Q1,A1\n,Q2,A2\n";
        let rows = parse_csv_records(data.as_bytes(), "sample").unwrap();
        assert_eq!(rows[1].as_ref().unwrap().rank, "2");
    }

    #[test]
    fn test_unreadable_row_skipped_in_place() {
        let data: &[u8] = b"rank,question,answer\n1,Q1,A1\n2,Q2,\xff\xfe\n3,Q3,A3\n";
        let rows = parse_csv_records(data, "sample").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].as_ref().unwrap().question, "Q1");
        assert!(matches!(
            &rows[1],
            Err(RecordError::Unexpected { rank, .. }) if rank == "2"
        ));
        assert_eq!(rows[2].as_ref().unwrap().rank, "3");
    }

    #[test]
    fn test_missing_file() {
        let err = load_csv_records(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.is_missing_input());
    }
}
