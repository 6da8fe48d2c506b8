mod chat_message_test;
