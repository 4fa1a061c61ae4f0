use bcvec_codec::{RenderStyle, byte_string_literal};

use crate::error::Error;
use crate::extract::{TestVector, decode_vector};

/// Renders the full vector list as one bracketed array of 4-tuples:
/// `[` on its own line, one `(key, cost, salt, hash),` line per vector in
/// input order, `]` on its own line.
///
/// Keys are always rendered in full hex so control bytes, quotes, and
/// non-ASCII bytes reproduce exactly; `style` selects how salt and hash
/// bytes are shown. The table is built entirely in memory and only returned
/// once every vector has decoded, so a bad fixture can never leave partial
/// output behind.
pub fn render_table(vectors: &[TestVector], style: RenderStyle) -> Result<String, Error> {
    let mut table = String::from("[\n");

    for (index, vector) in vectors.iter().enumerate() {
        let decoded = decode_vector(index, vector)?;
        table.push_str(&format!(
            "\t({}, {}, {}, {}),\n",
            byte_string_literal(&decoded.key, RenderStyle::Hex),
            decoded.log_rounds,
            byte_string_literal(&decoded.salt, style),
            byte_string_literal(&decoded.hash, style),
        ));
    }

    table.push_str("]\n");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use crate::corpus::PYCA_VECTORS;
    use crate::error::Field;
    use crate::extract::{HEADER_LEN, SALT_B64_LEN};

    use super::*;

    #[test]
    fn test_render_table_golden() {
        let vectors = [
            TestVector {
                key: b"Kk4DQuMMfZL9o",
                encoded_salt: "$2b$04$cVWp4XaNU8a4v1uMRum2SO",
                expected: "$2b$04$cVWp4XaNU8a4v1uMRum2SO026BWLIoQMD/TXg5uZV.0P.uO8m3YEm",
            },
            TestVector {
                key: b"",
                encoded_salt: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.",
                expected: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.7uG0VCzI2bS7j6ymqJi9CdcdxiRTWNy",
            },
        ];

        let table = render_table(&vectors, RenderStyle::Hex).unwrap();
        assert_eq!(
            table,
            "[\n\
             \t(b\"\\x4b\\x6b\\x34\\x44\\x51\\x75\\x4d\\x4d\\x66\\x5a\\x4c\\x39\\x6f\", 4, \
             b\"\\x79\\x76\\x2b\\xe9\\x97\\x0f\\x5b\\xe7\\x3a\\xc7\\x7c\\x0e\\x4f\\x0a\\x38\\x51\", \
             b\"\\xdb\\x8f\\x03\\x60\\xd2\\xaa\\x48\\xe1\\x41\\x55\\x98\\xbb\\xc1\\xb5\\xc0\\xd9\\x10\\x30\\x43\\xea\\x39\\x68\\x6a\"),\n\
             \t(b\"\", 5, \
             b\"\\x10\\x41\\x04\\x10\\x41\\x04\\x10\\x41\\x04\\x10\\x41\\x04\\x10\\x41\\x04\\x10\", \
             b\"\\xf7\\x02\\x36\\x5c\\x4d\\x4a\\xe1\\xd5\\x3d\\x97\\xcd\\x28\\xb0\\xb9\\x3f\\x11\\xf7\\x9f\\xce\\x44\\xd5\\x60\\xfd\"),\n\
             ]\n"
        );
    }

    #[test]
    fn test_output_preserves_input_order() {
        // Distinguishable costs 4, 10, 12 must come out in input order.
        let vectors = [
            TestVector {
                key: b"a",
                encoded_salt: "$2b$04$cVWp4XaNU8a4v1uMRum2SO",
                expected: "$2b$04$cVWp4XaNU8a4v1uMRum2SO026BWLIoQMD/TXg5uZV.0P.uO8m3YEm",
            },
            TestVector {
                key: b"b",
                encoded_salt: "$2b$10$M0czkWH2UYv2gdLUeTSoFe",
                expected: "$2b$10$M0czkWH2UYv2gdLUeTSoFeM1jC0piCl3zF5cmGhzCibHZrNHkmckG",
            },
            TestVector {
                key: b"c",
                encoded_salt: "$2b$12$cVWp4XaNU8a4v1uMRum2SO",
                expected: "$2b$12$cVWp4XaNU8a4v1uMRum2SO026BWLIoQMD/TXg5uZV.0P.uO8m3YEm",
            },
        ];

        let table = render_table(&vectors, RenderStyle::Hex).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), vectors.len() + 2);
        assert_eq!(lines.first(), Some(&"["));
        assert_eq!(lines.last(), Some(&"]"));
        for (line, cost) in lines[1..=3].iter().zip([4, 10, 12]) {
            assert!(line.contains(&format!(", {cost}, ")), "cost {cost} not in {line}");
        }
    }

    #[test]
    fn test_bad_fixture_aborts_whole_batch() {
        let vectors = [
            TestVector {
                key: b"a",
                encoded_salt: "$2b$04$cVWp4XaNU8a4v1uMRum2SO",
                expected: "$2b$04$cVWp4XaNU8a4v1uMRum2SO026BWLIoQMD/TXg5uZV.0P.uO8m3YEm",
            },
            TestVector {
                key: b"b",
                encoded_salt: "$2b$04$cVWp4XaNU8a4v1uMRum2S!",
                expected: "$2b$04$cVWp4XaNU8a4v1uMRum2SO026BWLIoQMD/TXg5uZV.0P.uO8m3YEm",
            },
        ];

        let err = render_table(&vectors, RenderStyle::Hex).unwrap_err();
        assert!(
            matches!(err, Error::Decode { index: 1, field: Field::Salt, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_whole_corpus_renders() {
        let table = render_table(PYCA_VECTORS, RenderStyle::Hex).unwrap();
        assert_eq!(table.lines().count(), PYCA_VECTORS.len() + 2);

        for (index, vector) in PYCA_VECTORS.iter().enumerate() {
            let decoded = decode_vector(index, vector).unwrap();
            assert_eq!(decoded.salt.len(), 16, "vector {index}");
            assert_eq!(decoded.hash.len(), 23, "vector {index}");
            // The full hash string embeds the same salt segment as the salt field.
            assert_eq!(
                &vector.expected[HEADER_LEN..HEADER_LEN + SALT_B64_LEN],
                &vector.encoded_salt[HEADER_LEN..],
                "vector {index}"
            );
        }
    }

    #[test]
    fn test_readable_style_applies_to_salt_and_hash_only() {
        let vectors = [TestVector {
            key: b"U*U",
            encoded_salt: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.",
            expected: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW",
        }];

        let table = render_table(&vectors, RenderStyle::Printable).unwrap();
        // Key stays fully escaped even in readable mode.
        assert!(table.contains("(b\"\\x55\\x2a\\x55\", 5, "), "{table}");
        // Salt bytes 0x10 0x41 ('A') 0x04 ... mix escapes with bare chars.
        assert!(table.contains("b\"\\x10A\\x04"), "{table}");
    }
}
