//! CSV field motions for Normal mode.
//!
//! `w`, `e` and `b` move by comma-separated fields rather than by words. Each
//! function takes the line bytes and the current cursor and returns the new
//! cursor. None of them look past `len - 1`.

const DELIMITER: u8 = b',';

/// Target of `w`: the first character after the next comma.
///
/// Steps forward one character at a time while the cursor is before the last
/// character, stopping right after a comma has been stepped over.
///
/// # Example
///
/// ```
/// use linequill::editor::motion::next_field_start;
///
/// assert_eq!(next_field_start(b"a,b,c", 0), 2);
/// assert_eq!(next_field_start(b"a,b,c", 2), 4);
/// assert_eq!(next_field_start(b"abc", 0), 2);
/// ```
pub fn next_field_start(line: &[u8], cursor: usize) -> usize {
    let last = line.len().saturating_sub(1);
    let mut pos = cursor;
    while pos < last {
        let consumed = line[pos];
        pos += 1;
        if consumed == DELIMITER {
            break;
        }
    }
    pos
}

/// Target of `e`: the last character of the current or next field.
///
/// Always advances at least one column when possible, then stops on the
/// character immediately before the next comma. An empty field between two
/// commas ends on the first of them.
///
/// # Example
///
/// ```
/// use linequill::editor::motion::next_field_end;
///
/// assert_eq!(next_field_end(b"abc,de", 0), 2);
/// assert_eq!(next_field_end(b"abc,de", 2), 5);
/// assert_eq!(next_field_end(b"a,b,c", 0), 2);
/// assert_eq!(next_field_end(b"a,,b", 0), 1);
/// ```
pub fn next_field_end(line: &[u8], cursor: usize) -> usize {
    let len = line.len();
    if cursor + 1 >= len {
        return cursor.min(len.saturating_sub(1));
    }
    let mut pos = cursor + 1;
    while pos + 1 < len && line[pos + 1] != DELIMITER {
        pos += 1;
    }
    pos.min(len - 1)
}

/// Target of `b`: the first character of the current or previous field.
///
/// Always retreats at least one column when possible, then stops where the
/// preceding character is a comma, so an empty field is a stop of its own.
///
/// # Example
///
/// ```
/// use linequill::editor::motion::prev_field_start;
///
/// assert_eq!(prev_field_start(b"a,b,c", 4), 2);
/// assert_eq!(prev_field_start(b"a,b,c", 2), 0);
/// assert_eq!(prev_field_start(b"abc,def", 6), 4);
/// assert_eq!(prev_field_start(b"a,,b", 3), 2);
/// ```
pub fn prev_field_start(line: &[u8], cursor: usize) -> usize {
    let mut pos = cursor.min(line.len().saturating_sub(1));
    if pos == 0 {
        return 0;
    }
    pos -= 1;
    while pos > 0 && line[pos - 1] != DELIMITER {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_field_start_stops_at_last_char() {
        assert_eq!(next_field_start(b"a,b,c", 4), 4);
        assert_eq!(next_field_start(b"abc,", 0), 3);
        assert_eq!(next_field_start(b"", 0), 0);
    }

    #[test]
    fn test_next_field_start_consecutive_commas() {
        assert_eq!(next_field_start(b"a,,b", 0), 2);
        assert_eq!(next_field_start(b"a,,b", 2), 3);
    }

    #[test]
    fn test_next_field_end_on_last_char() {
        assert_eq!(next_field_end(b"abc", 2), 2);
        assert_eq!(next_field_end(b"", 0), 0);
    }

    #[test]
    fn test_next_field_end_trailing_commas() {
        assert_eq!(next_field_end(b"a,,", 0), 1);
        assert_eq!(next_field_end(b"a,,", 1), 2);
    }

    /// `(line, start, w, e, b)` for every start column.
    const FIELD_TABLE: &[(&str, usize, usize, usize, usize)] = &[
        ("a,,b", 0, 2, 1, 0),
        ("a,,b", 1, 2, 3, 0),
        ("a,,b", 2, 3, 3, 0),
        ("a,,b", 3, 3, 3, 2),
        (",a", 0, 1, 1, 0),
        (",a", 1, 1, 1, 0),
        ("a,", 0, 1, 1, 0),
        ("a,", 1, 1, 1, 0),
    ];

    #[test]
    fn test_motions_around_empty_and_edge_fields() {
        for &(text, start, w, e, b) in FIELD_TABLE {
            let line = text.as_bytes();
            assert_eq!(next_field_start(line, start), w, "w on {:?} from {}", text, start);
            assert_eq!(next_field_end(line, start), e, "e on {:?} from {}", text, start);
            assert_eq!(prev_field_start(line, start), b, "b on {:?} from {}", text, start);
        }
    }

    #[test]
    fn test_b_undoes_w_between_field_starts() {
        let line: &[u8] = b"ab,,c,def,";
        let field_starts = (0..line.len()).filter(|&i| i == 0 || line[i - 1] == DELIMITER);
        for start in field_starts {
            let target = next_field_start(line, start);
            if target > start && line[target - 1] == DELIMITER {
                assert_eq!(prev_field_start(line, target), start, "from {}", start);
            }
        }
    }

    #[test]
    fn test_prev_field_start_from_comma() {
        // Cursor on the comma belongs to the field before it
        assert_eq!(prev_field_start(b"ab,cd", 2), 0);
    }

    #[test]
    fn test_prev_field_start_at_zero() {
        assert_eq!(prev_field_start(b"abc", 0), 0);
        assert_eq!(prev_field_start(b"", 0), 0);
    }
}
