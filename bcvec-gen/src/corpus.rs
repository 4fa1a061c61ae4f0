use crate::extract::TestVector;

/// The pyca bcrypt reference vectors: `(key, encoded salt, expected hash)`
/// triples drawn from the OpenBSD regress suite and py-bcrypt, used as golden
/// fixtures by bcrypt implementations.
///
/// The list is embedded read-only and fully in memory before emission begins.
/// It deliberately covers an empty key, a key with a non-ASCII byte, a key
/// longer than bcrypt's 72-byte limit, and both `$2a$` and `$2b$` headers.
pub static PYCA_VECTORS: &[TestVector] = &[
    TestVector {
        key: b"Kk4DQuMMfZL9o",
        encoded_salt: "$2b$04$cVWp4XaNU8a4v1uMRum2SO",
        expected: "$2b$04$cVWp4XaNU8a4v1uMRum2SO026BWLIoQMD/TXg5uZV.0P.uO8m3YEm",
    },
    TestVector {
        key: b"9IeRXmnGxMYbs",
        encoded_salt: "$2b$04$pQ7gRO7e6wx/936oXhNjrO",
        expected: "$2b$04$pQ7gRO7e6wx/936oXhNjrOUNOHL1D0h1N2IDbJZYs.1ppzSof6SPy",
    },
    TestVector {
        key: b"xVQVbwa1S0M8r",
        encoded_salt: "$2b$04$SQe9knOzepOVKoYXo9xTte",
        expected: "$2b$04$SQe9knOzepOVKoYXo9xTteNYr6MBwVz4tpriJVe3PNgYufGIsgKcW",
    },
    TestVector {
        key: b"Zfgr26LWd22Za",
        encoded_salt: "$2b$04$eH8zX.q5Q.j2hO1NkVYJQO",
        expected: "$2b$04$eH8zX.q5Q.j2hO1NkVYJQOM6KxntS/ow3.YzVmFrE4t//CoF4fvne",
    },
    TestVector {
        key: b"Tg4daC27epFBE",
        encoded_salt: "$2b$04$ahiTdwRXpUG2JLRcIznxc.",
        expected: "$2b$04$ahiTdwRXpUG2JLRcIznxc.s1.ydaPGD372bsGs8NqyYjLY1inG5n2",
    },
    TestVector {
        key: b"xhQPMmwh5ALzW",
        encoded_salt: "$2b$04$nQn78dV0hGHf5wUBe0zOFu",
        expected: "$2b$04$nQn78dV0hGHf5wUBe0zOFu8n07ZbWWOKoGasZKRspZxtt.vBRNMIy",
    },
    TestVector {
        key: b"59je8h5Gj71tg",
        encoded_salt: "$2b$04$cvXudZ5ugTg95W.rOjMITu",
        expected: "$2b$04$cvXudZ5ugTg95W.rOjMITuM1jC0piCl3zF5cmGhzCibHZrNHkmckG",
    },
    TestVector {
        key: b"wT4fHJa2N9WSW",
        encoded_salt: "$2b$04$YYjtiq4Uh88yUsExO0RNTu",
        expected: "$2b$04$YYjtiq4Uh88yUsExO0RNTuEJ.tZlsONac16A8OcLHleWFjVawfGvO",
    },
    TestVector {
        key: b"uSgFRnQdOgm4S",
        encoded_salt: "$2b$04$WLTjgY/pZSyqX/fbMbJzf.",
        expected: "$2b$04$WLTjgY/pZSyqX/fbMbJzf.qxCeTMQOzgL.CimRjMHtMxd/VGKojMu",
    },
    TestVector {
        key: b"tEPtJZXur16Vg",
        encoded_salt: "$2b$04$2moPs/x/wnCfeQ5pCheMcu",
        expected: "$2b$04$2moPs/x/wnCfeQ5pCheMcuSJQ/KYjOZG780UjA/SiR.KsYWNrC7SG",
    },
    TestVector {
        key: b"vvho8C6nlVf9K",
        encoded_salt: "$2b$04$HrEYC/AQ2HS77G78cQDZQ.",
        expected: "$2b$04$HrEYC/AQ2HS77G78cQDZQ.r44WGcruKw03KHlnp57yXmeb2AZ6r5O",
    },
    TestVector {
        key: b"5auCCY9by0Ruf",
        encoded_salt: "$2b$04$vVYgSTfB8KVbmhbZE/k3R.",
        expected: "$2b$04$vVYgSTfB8KVbmhbZE/k3R.ux9A0lJUM4CZwCkHI9fifke2.rTF7MG",
    },
    TestVector {
        key: b"GtTkR6qn2QOZW",
        encoded_salt: "$2b$04$JfoNrR8.doieoI8..F.C1O",
        expected: "$2b$04$JfoNrR8.doieoI8..F.C1OQgwE3uTeuardy6lw0AjALUzOARoyf2m",
    },
    TestVector {
        key: b"zKo8vdFSnjX0f",
        encoded_salt: "$2b$04$HP3I0PUs7KBEzMBNFw7o3O",
        expected: "$2b$04$HP3I0PUs7KBEzMBNFw7o3O7f/uxaZU7aaDot1quHMgB2yrwBXsgyy",
    },
    TestVector {
        key: b"I9VfYlacJiwiK",
        encoded_salt: "$2b$04$xnFVhJsTzsFBTeP3PpgbMe",
        expected: "$2b$04$xnFVhJsTzsFBTeP3PpgbMeMREb6rdKV9faW54Sx.yg9plf4jY8qT6",
    },
    TestVector {
        key: b"VFPO7YXnHQbQO",
        encoded_salt: "$2b$04$WQp9.igoLqVr6Qk70mz6xu",
        expected: "$2b$04$WQp9.igoLqVr6Qk70mz6xuRxE0RttVXXdukpR9N54x17ecad34ZF6",
    },
    TestVector {
        key: b"VDx5BdxfxstYk",
        encoded_salt: "$2b$04$xgZtlonpAHSU/njOCdKztO",
        expected: "$2b$04$xgZtlonpAHSU/njOCdKztOPuPFzCNVpB4LGicO4/OGgHv.uKHkwsS",
    },
    TestVector {
        key: b"dEe6XfVGrrfSH",
        encoded_salt: "$2b$04$2Siw3Nv3Q/gTOIPetAyPr.",
        expected: "$2b$04$2Siw3Nv3Q/gTOIPetAyPr.GNMIfl7hPlk7j6ajSkoGYXXAKQ1Pqaq",
    },
    TestVector {
        key: b"cTT0EAFdwJiLn",
        encoded_salt: "$2b$04$7/Qj7Kd8BcSahPO4khB8me",
        expected: "$2b$04$7/Qj7Kd8BcSahPO4khB8me4ssDJCW3r4OGYqPF87jxtrSyPj5cS5m",
    },
    TestVector {
        key: b"J8eHUDuxBB520",
        encoded_salt: "$2b$04$VvlCUKbTMjaxaYJ.k5juoe",
        expected: "$2b$04$VvlCUKbTMjaxaYJ.k5juoecpG/7IzcH1AkmqKi.lIZMVIOLClWAk.",
    },
    TestVector {
        key: b"U*U",
        encoded_salt: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.",
        expected: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW",
    },
    TestVector {
        key: b"U*U*",
        encoded_salt: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.",
        expected: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.VGOzA784oUp/Z0DY336zx7pLYAy0lwK",
    },
    TestVector {
        key: b"U*U*U",
        encoded_salt: "$2a$05$XXXXXXXXXXXXXXXXXXXXXO",
        expected: "$2a$05$XXXXXXXXXXXXXXXXXXXXXOAcXxm9kjPGEMsLznoKqmqw7tc8WCx4a",
    },
    TestVector {
        key: b"",
        encoded_salt: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.",
        expected: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.7uG0VCzI2bS7j6ymqJi9CdcdxiRTWNy",
    },
    TestVector {
        key: b"\xa3",
        encoded_salt: "$2a$05$/OK.fbVrR/bpIqNJ5ianF.",
        expected: "$2a$05$/OK.fbVrR/bpIqNJ5ianF.Sa7shbm4.OzKpvFnX1pQLmQW96oUlCq",
    },
    TestVector {
        key: b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
               0123456789chars after 72 are ignored",
        encoded_salt: "$2a$05$abcdefghijklmnopqrstuu",
        expected: "$2a$05$abcdefghijklmnopqrstuu5s2v8.iXieOjg/.AySBTTZIIVFJeBui",
    },
];
